//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules, the session state machine and the
//! persistence contracts. It has no dependency on a terminal or on wall-clock
//! time: the caller passes timestamps in, so every rule can be driven from a
//! test.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 cell grid, row detection and row clearing
//! - [`pieces`]: tetromino catalog and matrix rotation
//! - [`collision`]: collision test, spawn position and landing projection
//! - [`movement`]: translate, rotate with horizontal kicks, lock
//! - [`scoring`]: flat line scoring, levels and gravity speed
//! - [`scheduler`]: per-frame drop scheduler and clocks
//! - [`session`]: the game state machine
//! - [`rng`]: uniform piece source and scripted sources for tests
//! - [`leaderboard`], [`settings`], [`store`]: persisted data and the store seam
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: each piece is drawn independently from the seven kinds
//! - **Simple kicks**: a blocked rotation retries at x offsets -1, +1, -2, +2
//! - **Immediate lock**: a gravity tick that cannot move down locks the piece
//! - **Ghost piece**: the landing position is derived on demand
//! - **Scoring**: `rows * 100 * level`, using the level before the clear
//! - **Levels**: one level per 10 lines, starting at 1
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameSession;
//! use blockfall_core::rng::ScriptedSource;
//! use blockfall_core::types::{GameStatus, PieceKind};
//!
//! let mut game = GameSession::with_source(ScriptedSource::repeat(PieceKind::O));
//! game.start();
//!
//! game.move_left();
//! game.rotate_cw();
//! game.hard_drop();
//!
//! assert_eq!(game.status(), GameStatus::Playing);
//! assert_eq!(game.board().filled_count(), 4);
//! ```
//!
//! # Timing
//!
//! Gravity is polled once per frame with [`GameSession::frame`]. The interval
//! is 1000ms at level 1, 50ms shorter per level, never below 100ms.

pub mod board;
pub mod collision;
pub mod leaderboard;
pub mod movement;
pub mod pieces;
pub mod rng;
pub mod scheduler;
pub mod scoring;
pub mod session;
pub mod settings;
pub mod snapshot;
pub mod store;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Position};
pub use leaderboard::{clear_leaderboard, record_score, Leaderboard, LeaderboardEntry};
pub use pieces::{definition, Shape, TetrominoDef, CATALOG};
pub use rng::{PieceSource, ScriptedSource, UniformSource};
pub use scheduler::{Clock, DropScheduler, ManualClock, MonotonicClock};
pub use session::{ActivePiece, GameResult, GameSession};
pub use settings::Settings;
pub use snapshot::GameSnapshot;
pub use store::{MemoryStore, Store, StoreError};
