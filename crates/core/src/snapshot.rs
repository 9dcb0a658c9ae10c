//! Read-only view of a session for renderers.

use crate::board::{Board, Position};
use crate::session::ActivePiece;
use crate::types::{GameStatus, PieceKind};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: Board,
    pub active: Option<ActivePiece>,
    /// Where the active piece would land on a hard drop
    pub ghost: Option<Position>,
    pub next_kind: Option<PieceKind>,
    pub status: GameStatus,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = Board::new();
        self.active = None;
        self.ghost = None;
        self.next_kind = None;
        self.status = GameStatus::Idle;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: Board::new(),
            active: None,
            ghost: None,
            next_kind: None,
            status: GameStatus::Idle,
            score: 0,
            level: 1,
            lines: 0,
        }
    }
}
