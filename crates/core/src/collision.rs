//! Collision and placement checks.
//!
//! All functions are pure reads of the board.

use crate::board::{Board, Position};
use crate::pieces::Shape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// True if any filled cell of `shape` at `position` is out of bounds or lands
/// on an occupied cell. Empty matrix cells never collide.
pub fn has_collision(shape: &Shape, position: Position, board: &Board) -> bool {
    shape
        .filled_cells()
        .any(|(dx, dy)| !board.is_free(position.x + dx, position.y + dy))
}

/// Horizontally centered on the top row: `x = (W - width) / 2`, `y = 0`
pub fn spawn_position(shape: &Shape) -> Position {
    let x = (BOARD_WIDTH.saturating_sub(shape.width()) / 2) as i8;
    Position::new(x, 0)
}

/// True when a fresh piece cannot be placed at its spawn position
pub fn check_spawn_collision(shape: &Shape, board: &Board) -> bool {
    has_collision(shape, spawn_position(shape), board)
}

/// Lowest reachable position straight below `position`.
///
/// If `position` itself collides it is returned unchanged.
pub fn landing_projection(shape: &Shape, position: Position, board: &Board) -> Position {
    let mut landing = position;
    for _ in 0..BOARD_HEIGHT {
        let below = landing.offset(0, 1);
        if has_collision(shape, below, board) {
            break;
        }
        landing = below;
    }
    landing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::spawn_shape;
    use crate::types::PieceKind;

    #[test]
    fn test_spawn_position_centers_by_matrix_width() {
        assert_eq!(spawn_position(&spawn_shape(PieceKind::I)), Position::new(3, 0));
        assert_eq!(spawn_position(&spawn_shape(PieceKind::O)), Position::new(4, 0));
        assert_eq!(spawn_position(&spawn_shape(PieceKind::T)), Position::new(3, 0));
    }

    #[test]
    fn test_empty_matrix_cells_never_collide() {
        // I spawn matrix has an empty top row; placing it at y = -1 keeps the
        // filled row at y = 0.
        let board = Board::new();
        let i = spawn_shape(PieceKind::I);
        assert!(!has_collision(&i, Position::new(3, -1), &board));
        assert!(has_collision(&i, Position::new(3, -2), &board));
    }

    #[test]
    fn test_collision_with_occupied_cell() {
        let mut board = Board::new();
        board.set(5, 1, Some(PieceKind::Z));
        let t = spawn_shape(PieceKind::T);
        assert!(has_collision(&t, Position::new(3, 0), &board));
        assert!(!has_collision(&t, Position::new(0, 0), &board));
    }

    #[test]
    fn test_landing_projection_on_empty_board() {
        let board = Board::new();
        let o = spawn_shape(PieceKind::O);
        assert_eq!(
            landing_projection(&o, Position::new(4, 0), &board),
            Position::new(4, 18)
        );

        // I spawn matrix: filled row is row 1, so origin lands at y = 18.
        let i = spawn_shape(PieceKind::I);
        assert_eq!(
            landing_projection(&i, Position::new(3, 0), &board),
            Position::new(3, 18)
        );
    }

    #[test]
    fn test_landing_projection_stops_on_stack() {
        let mut board = Board::new();
        board.fill_row_except(15, PieceKind::L, &[]);
        let o = spawn_shape(PieceKind::O);
        assert_eq!(
            landing_projection(&o, Position::new(0, 0), &board),
            Position::new(0, 13)
        );
    }

    #[test]
    fn test_spawn_collision_when_top_blocked() {
        let mut board = Board::new();
        assert!(!check_spawn_collision(&spawn_shape(PieceKind::O), &board));
        board.set(4, 0, Some(PieceKind::S));
        assert!(check_spawn_collision(&spawn_shape(PieceKind::O), &board));
    }
}
