//! Board tests

use blockfall::core::Board;
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_free(x, y), "Cell ({}, {}) should be free", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
}

#[test]
fn test_free_and_occupied() {
    let mut board = Board::new();
    board.set(5, 10, Some(PieceKind::T));

    assert!(!board.is_free(5, 10));
    assert!(board.is_occupied(5, 10));

    // Outside the grid is never free and never occupied.
    assert!(!board.is_free(-1, 0));
    assert!(!board.is_occupied(-1, 0));
    assert!(!board.is_free(BOARD_WIDTH as i8, 0));
}

#[test]
fn test_completed_rows_top_to_bottom() {
    let mut board = Board::new();
    board.fill_row_except(19, PieceKind::O, &[]);
    board.fill_row_except(12, PieceKind::I, &[]);
    board.fill_row_except(15, PieceKind::I, &[4]);

    assert_eq!(board.completed_rows().as_slice(), &[12, 19]);
    assert!(!board.is_row_full(15));
}

#[test]
fn test_cleared_shifts_rows_above() {
    let mut board = Board::new();
    for y in [5, 10, 15] {
        board.fill_row_except(y, PieceKind::T, &[]);
    }
    board.set(0, 4, Some(PieceKind::J));
    board.set(0, 9, Some(PieceKind::L));
    board.set(0, 14, Some(PieceKind::S));
    board.set(0, 19, Some(PieceKind::Z));

    let rows = board.completed_rows();
    let next = board.cleared(&rows);

    // Each row drops by the number of cleared rows below it.
    assert_eq!(next.get(0, 7), Some(Some(PieceKind::J)));
    assert_eq!(next.get(0, 11), Some(Some(PieceKind::L)));
    assert_eq!(next.get(0, 15), Some(Some(PieceKind::S)));
    assert_eq!(next.get(0, 19), Some(Some(PieceKind::Z)));
    assert_eq!(next.filled_count(), 4);
    for y in 0..3 {
        assert!(next.row(y).iter().all(|c| c.is_none()));
    }
}

#[test]
fn test_cleared_with_no_rows_is_identity() {
    let mut board = Board::new();
    board.set(3, 17, Some(PieceKind::L));
    assert_eq!(board.cleared(&[]), board);
}

#[test]
fn test_cleared_does_not_mutate_input() {
    let mut board = Board::new();
    board.fill_row_except(19, PieceKind::O, &[]);
    let _ = board.cleared(&[19]);
    assert!(board.is_row_full(19));
}

#[test]
fn test_from_cells_roundtrip_and_validation() {
    let mut board = Board::new();
    board.set(2, 3, Some(PieceKind::S));
    let cells = board.to_cells();
    assert_eq!(cells.len(), BOARD_HEIGHT as usize);
    assert!(cells.iter().all(|row| row.len() == BOARD_WIDTH as usize));
    assert_eq!(Board::from_cells(cells), Some(board));

    assert_eq!(Board::from_cells(vec![vec![None; 10]; 19]), None);
    assert_eq!(Board::from_cells(vec![vec![None; 9]; 20]), None);
}
