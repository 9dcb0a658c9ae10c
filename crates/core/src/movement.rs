//! Movement and rotation resolver
//!
//! Rotation uses a simple horizontal kick search instead of SRS tables: try
//! the rotated matrix in place, then shifted by each entry of [`KICK_OFFSETS`]
//! in order. `None` always means "blocked, nothing changes".

use crate::board::{Board, Position};
use crate::collision::has_collision;
use crate::pieces::Shape;
use crate::types::{Direction, PieceKind};

/// Horizontal wall-kick offsets, tried in this exact order
pub const KICK_OFFSETS: [i8; 4] = [-1, 1, -2, 2];

/// Shifted position if it is collision-free
pub fn translate(
    shape: &Shape,
    position: Position,
    board: &Board,
    dx: i8,
    dy: i8,
) -> Option<Position> {
    let next = position.offset(dx, dy);
    if has_collision(shape, next, board) {
        None
    } else {
        Some(next)
    }
}

/// Rotate with wall kicks. Returns the rotated shape and the position it fits at.
pub fn rotate(
    shape: &Shape,
    position: Position,
    board: &Board,
    direction: Direction,
) -> Option<(Shape, Position)> {
    let rotated = match direction {
        Direction::Cw => shape.rotate_cw(),
        Direction::Ccw => shape.rotate_ccw(),
    };

    if !has_collision(&rotated, position, board) {
        return Some((rotated, position));
    }

    KICK_OFFSETS
        .iter()
        .map(|&dx| position.offset(dx, 0))
        .find(|&candidate| !has_collision(&rotated, candidate, board))
        .map(|candidate| (rotated, candidate))
}

/// Board with the piece's filled cells stamped in.
///
/// Precondition: the piece does not collide at `position`. This is not
/// re-validated; out-of-bounds cells are skipped.
pub fn lock(shape: &Shape, position: Position, kind: PieceKind, board: &Board) -> Board {
    debug_assert!(
        !has_collision(shape, position, board),
        "locking a colliding piece"
    );

    let mut next = board.clone();
    for (dx, dy) in shape.filled_cells() {
        next.set(position.x + dx, position.y + dy, Some(kind));
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::landing_projection;
    use crate::pieces::spawn_shape;
    use crate::types::BOARD_WIDTH;

    #[test]
    fn test_translate_blocked_by_wall() {
        let board = Board::new();
        let o = spawn_shape(PieceKind::O);
        assert_eq!(
            translate(&o, Position::new(1, 0), &board, -1, 0),
            Some(Position::new(0, 0))
        );
        assert_eq!(translate(&o, Position::new(0, 0), &board, -1, 0), None);
        assert_eq!(translate(&o, Position::new(8, 0), &board, 1, 0), None);
    }

    #[test]
    fn test_translate_blocked_by_floor() {
        let board = Board::new();
        let o = spawn_shape(PieceKind::O);
        assert_eq!(translate(&o, Position::new(4, 18), &board, 0, 1), None);
    }

    #[test]
    fn test_rotate_in_place_when_free() {
        let board = Board::new();
        let t = spawn_shape(PieceKind::T);
        let (shape, pos) = rotate(&t, Position::new(3, 5), &board, Direction::Cw).unwrap();
        assert_eq!(shape, t.rotate_cw());
        assert_eq!(pos, Position::new(3, 5));
    }

    #[test]
    fn test_vertical_i_at_right_wall_kicks_left() {
        let board = Board::new();
        // Vertical I occupies matrix column 2; flush against the right wall
        // that puts the origin at x = W - 3.
        let vertical = spawn_shape(PieceKind::I).rotate_cw();
        let pos = Position::new(BOARD_WIDTH as i8 - 3, 5);
        assert!(translate(&vertical, pos, &board, 1, 0).is_none());

        // Horizontal I needs x in 0..=6; in place (7) fails, -1 gives 6.
        let (shape, kicked) = rotate(&vertical, pos, &board, Direction::Cw).unwrap();
        assert_eq!(shape.filled_cells().map(|(_, dy)| dy).max(), Some(2));
        assert_eq!(kicked, Position::new(6, 5));
    }

    #[test]
    fn test_rotate_rejected_when_no_kick_fits() {
        let mut board = Board::new();
        // Wall of blocks on both sides of a one-wide well.
        for y in 0..20 {
            for x in 0..10 {
                if x != 4 {
                    board.set(x, y, Some(PieceKind::Z));
                }
            }
        }
        let vertical = spawn_shape(PieceKind::I).rotate_cw();
        let pos = Position::new(2, 10);
        assert!(!has_collision(&vertical, pos, &board));
        assert_eq!(rotate(&vertical, pos, &board, Direction::Cw), None);
        assert_eq!(rotate(&vertical, pos, &board, Direction::Ccw), None);
    }

    #[test]
    fn test_lock_stamps_filled_cells_only() {
        let board = Board::new();
        let t = spawn_shape(PieceKind::T);
        let pos = landing_projection(&t, Position::new(3, 0), &board);
        let locked = lock(&t, pos, PieceKind::T, &board);

        assert_eq!(locked.filled_count(), 4);
        assert_eq!(locked.get(4, pos.y), Some(Some(PieceKind::T)));
        assert_eq!(locked.get(3, pos.y), Some(None));
        assert!(board.is_empty(), "input board is not mutated");
    }
}
