//! Property tests for the pure game rules.

use proptest::prelude::*;

use blockfall_core::collision::{check_spawn_collision, has_collision, landing_projection, spawn_position};
use blockfall_core::movement::lock;
use blockfall_core::rng::ScriptedSource;
use blockfall_core::scoring::{drop_interval_ms, level_for, points_for_clear};
use blockfall_core::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
use blockfall_core::pieces::spawn_shape;
use blockfall_core::{Board, GameSession, Position};

fn any_kind() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

/// Rows kept empty at the top so any piece fits at `y = 0`
const CLEAR_TOP: usize = 4;

/// Board whose every row has at least one hole and whose top rows are empty
fn board_without_full_rows() -> impl Strategy<Value = Board> {
    prop::collection::vec(
        (prop::collection::vec(any::<bool>(), BOARD_WIDTH as usize), 0..BOARD_WIDTH as usize),
        BOARD_HEIGHT as usize,
    )
    .prop_map(|rows| {
        let mut board = Board::new();
        for (y, (filled, hole)) in rows.into_iter().enumerate().skip(CLEAR_TOP) {
            for (x, on) in filled.into_iter().enumerate() {
                if on && x != hole {
                    board.set(x as i8, y as i8, Some(PieceKind::Z));
                }
            }
        }
        board
    })
}

proptest! {
    #[test]
    fn four_turns_are_identity(kind in any_kind(), ccw in any::<bool>()) {
        let shape = spawn_shape(kind);
        let mut turned = shape;
        for _ in 0..4 {
            turned = if ccw { turned.rotate_ccw() } else { turned.rotate_cw() };
        }
        prop_assert_eq!(turned, shape);
    }

    #[test]
    fn cw_then_ccw_round_trips(kind in any_kind(), turns in 0usize..4) {
        let mut shape = spawn_shape(kind);
        for _ in 0..turns {
            shape = shape.rotate_cw();
        }
        prop_assert_eq!(shape.rotate_cw().rotate_ccw(), shape);
    }

    #[test]
    fn clearing_nothing_keeps_the_board(board in board_without_full_rows()) {
        prop_assert!(board.completed_rows().is_empty());
        prop_assert_eq!(board.cleared(&board.completed_rows()), board.clone());
    }

    #[test]
    fn spawn_is_free_on_empty_board(kind in any_kind()) {
        let shape = spawn_shape(kind);
        prop_assert!(!check_spawn_collision(&shape, &Board::new()));
        let pos = spawn_position(&shape);
        prop_assert_eq!(pos.y, 0);
        prop_assert_eq!(pos.x, ((BOARD_WIDTH - shape.width()) / 2) as i8);
    }

    #[test]
    fn landing_rests_on_something(board in board_without_full_rows(), kind in any_kind(), x in 0i8..7) {
        let shape = spawn_shape(kind);
        let start = Position::new(x, 0);
        prop_assert!(!has_collision(&shape, start, &board));

        let landed = landing_projection(&shape, start, &board);
        prop_assert!(landed.y >= start.y);
        prop_assert!(!has_collision(&shape, landed, &board));
        prop_assert!(has_collision(&shape, landed.offset(0, 1), &board));
    }

    #[test]
    fn lock_adds_exactly_four_cells(board in board_without_full_rows(), kind in any_kind(), x in 0i8..7) {
        let shape = spawn_shape(kind);
        let start = Position::new(x, 0);
        prop_assert!(!has_collision(&shape, start, &board));

        let landed = landing_projection(&shape, start, &board);
        let locked = lock(&shape, landed, kind, &board);
        prop_assert_eq!(locked.filled_count(), board.filled_count() + 4);
    }

    #[test]
    fn drop_interval_is_floored_and_non_increasing(level in 1u32..10_000) {
        let here = drop_interval_ms(level);
        prop_assert!(here >= 100);
        prop_assert!(here <= 1_000);
        prop_assert!(drop_interval_ms(level + 1) <= here);
    }

    #[test]
    fn score_is_linear_in_rows(rows in 1u32..=4, level in 1u32..100) {
        prop_assert_eq!(points_for_clear(rows, level), rows * points_for_clear(1, level));
        prop_assert_eq!(level_for((level - 1) * 10), level);
    }

    #[test]
    fn hard_drops_keep_counters_consistent(kinds in prop::collection::vec(any_kind(), 1..40)) {
        let mut session = GameSession::with_source(ScriptedSource::new(kinds));
        session.start();
        let mut last_score = 0;
        for _ in 0..60 {
            if !session.hard_drop() {
                break;
            }
            prop_assert!(session.score() >= last_score);
            prop_assert_eq!(session.level(), level_for(session.lines()));
            prop_assert!(session.board().completed_rows().is_empty());
            last_score = session.score();
        }
    }
}
