//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the game core, the input conditioner, renderers and audio sinks alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Default frame poll interval (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity at level 1 |
//! | `DROP_STEP_MS` | 50 | Gravity speed-up per level |
//! | `MIN_DROP_MS` | 100 | Gravity floor |
//!
//! # DAS/ARR Timing
//!
//! | Key | Delay | Interval |
//! |-----|-------|----------|
//! | Left / Right | `DEFAULT_DAS_MS` (150) | `DEFAULT_ARR_MS` (50) |
//! | Soft drop | `SOFT_DROP_DAS_MS` (0) | `SOFT_DROP_ARR_MS` (50) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameEvent, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(GameEvent::HardDrop.as_str(), "hardDrop");
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Default frame poll interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity interval reduction per level above 1
pub const DROP_STEP_MS: u32 = 50;

/// Gravity interval floor
pub const MIN_DROP_MS: u32 = 100;

/// Lines required per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cleared row, multiplied by the current level
pub const POINTS_PER_ROW: u32 = 100;

/// DAS (Delayed Auto Shift) delay for horizontal movement
pub const DEFAULT_DAS_MS: u32 = 150;

/// ARR (Auto Repeat Rate) for horizontal movement
pub const DEFAULT_ARR_MS: u32 = 50;

/// Soft drop starts repeating immediately
pub const SOFT_DROP_DAS_MS: u32 = 0;

/// Soft drop repeat interval
pub const SOFT_DROP_ARR_MS: u32 = 50;

/// Maximum number of leaderboard entries kept
pub const LEADERBOARD_CAPACITY: usize = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(BASE_DROP_MS, 1000);
        assert_eq!(DROP_STEP_MS, 50);
        assert_eq!(MIN_DROP_MS, 100);

        assert_eq!(DEFAULT_DAS_MS, 150);
        assert_eq!(DEFAULT_ARR_MS, 50);
        assert_eq!(SOFT_DROP_DAS_MS, 0);
        assert_eq!(SOFT_DROP_ARR_MS, 50);
    }

    #[test]
    fn piece_kind_string_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(PieceKind::from_str("x"), None);
    }

    #[test]
    fn event_names_match_audio_vocabulary() {
        assert_eq!(GameEvent::Move.as_str(), "move");
        assert_eq!(GameEvent::SoftDrop.as_str(), "softDrop");
        assert_eq!(GameEvent::LineClear { rows: 2 }.as_str(), "lineClear");
        assert_eq!(GameEvent::LevelUp { level: 3 }.as_str(), "levelUp");
        assert_eq!(GameEvent::GameOver.as_str(), "gameOver");
    }
}

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Display color of a piece kind.
///
/// Renderers decide the actual palette; the core only carries the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Orange,
    Red,
    Yellow,
    Cyan,
    Green,
    Pink,
    Blue,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

/// Session lifecycle
///
/// `Idle -> Playing -> {Paused <-> Playing} -> GameOver -> (restart) -> Playing`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Idle,
    Playing,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Idle => "idle",
            GameStatus::Playing => "playing",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "gameover",
        }
    }
}

/// Rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Cw,
    Ccw,
}

/// Keys that auto-repeat with DAS/ARR timing while held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DasKey {
    Left,
    Right,
    SoftDrop,
}

impl DasKey {
    pub const ALL: [DasKey; 3] = [DasKey::Left, DasKey::Right, DasKey::SoftDrop];

    pub fn index(self) -> usize {
        match self {
            DasKey::Left => 0,
            DasKey::Right => 1,
            DasKey::SoftDrop => 2,
        }
    }
}

/// Logical game keys, independent of any keyboard backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    /// DAS-eligible key
    Das(DasKey),
    RotateCw,
    RotateCcw,
    HardDrop,
    /// Toggles pause / resume
    Pause,
    /// Starts a new game (restarts when a game is running)
    Start,
}

impl InputKey {
    pub const LEFT: InputKey = InputKey::Das(DasKey::Left);
    pub const RIGHT: InputKey = InputKey::Das(DasKey::Right);
    pub const SOFT_DROP: InputKey = InputKey::Das(DasKey::SoftDrop);

    /// Index of a one-shot key in per-key state tables
    pub fn one_shot_index(self) -> Option<usize> {
        match self {
            InputKey::Das(_) => None,
            InputKey::RotateCw => Some(0),
            InputKey::RotateCcw => Some(1),
            InputKey::HardDrop => Some(2),
            InputKey::Pause => Some(3),
            InputKey::Start => Some(4),
        }
    }
}

/// Number of one-shot keys tracked by the input conditioner
pub const ONE_SHOT_KEY_COUNT: usize = 5;

/// Fire-and-forget notifications emitted by the game session.
///
/// The audio collaborator maps these to sounds; renderers may use them for
/// effects. The core never waits on a consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Move,
    Rotate,
    SoftDrop,
    HardDrop,
    Lock,
    LineClear { rows: u8 },
    LevelUp { level: u32 },
    GameOver,
    Start,
    Pause,
    Resume,
}

impl GameEvent {
    /// Sound name used by the audio collaborator
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::Move => "move",
            GameEvent::Rotate => "rotate",
            GameEvent::SoftDrop => "softDrop",
            GameEvent::HardDrop => "hardDrop",
            GameEvent::Lock => "lock",
            GameEvent::LineClear { .. } => "lineClear",
            GameEvent::LevelUp { .. } => "levelUp",
            GameEvent::GameOver => "gameOver",
            GameEvent::Start => "start",
            GameEvent::Pause => "pause",
            GameEvent::Resume => "resume",
        }
    }
}
