//! Game session module - the state machine that owns a running game
//!
//! This module ties together the board, the catalog, the movement resolver,
//! scoring and the drop scheduler. Every public operation is atomic from the
//! caller's point of view and never fails: a blocked move or rotation simply
//! leaves the state unchanged, and a blocked spawn ends the game.
//!
//! ```text
//! Idle -> Playing -> {Paused <-> Playing} -> GameOver -> (restart) -> Playing
//! ```

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::board::{Board, Position};
use crate::collision::{check_spawn_collision, landing_projection, spawn_position};
use crate::movement::{lock, rotate, translate};
use crate::pieces::{definition, Shape};
use crate::rng::{PieceSource, UniformSource};
use crate::scheduler::DropScheduler;
use crate::scoring::{drop_interval_ms, level_for, points_for_clear};
use crate::snapshot::GameSnapshot;
use crate::types::{Color, Direction, GameEvent, GameStatus, PieceKind};

/// Most events a single operation can emit (hard drop: drop, lock, clear,
/// level up, game over)
pub const MAX_PENDING_EVENTS: usize = 8;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Current rotation's matrix
    pub shape: Shape,
    pub color: Color,
    pub position: Position,
}

impl ActivePiece {
    /// Catalog piece at its spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        let def = definition(kind);
        Self {
            kind,
            shape: def.shape,
            color: def.color,
            position: spawn_position(&def.shape),
        }
    }

    /// Absolute board coordinates of the filled cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dx, dy)| (self.position.x + dx, self.position.y + dy))
    }
}

/// Totals of a finished game, for the leaderboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession<S: PieceSource = UniformSource> {
    board: Board,
    active: Option<ActivePiece>,
    next_kind: Option<PieceKind>,
    source: S,
    status: GameStatus,
    score: u32,
    level: u32,
    lines: u32,
    scheduler: DropScheduler,
    /// Notifications from the most recent operation
    events: ArrayVec<GameEvent, MAX_PENDING_EVENTS>,
}

impl GameSession<UniformSource> {
    /// Idle session with an unseeded uniform piece source
    pub fn new() -> Self {
        Self::with_source(UniformSource::from_entropy())
    }

    /// Idle session with a deterministic piece sequence
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(UniformSource::seeded(seed))
    }
}

impl Default for GameSession<UniformSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PieceSource> GameSession<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next_kind: None,
            source,
            status: GameStatus::Idle,
            score: 0,
            level: 1,
            lines: 0,
            scheduler: DropScheduler::new(),
            events: ArrayVec::new(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn next_kind(&self) -> Option<PieceKind> {
        self.next_kind
    }

    pub fn scheduler(&self) -> &DropScheduler {
        &self.scheduler
    }

    /// Current gravity interval, derived from the level on demand
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    /// Landing position of the active piece
    pub fn ghost_position(&self) -> Option<Position> {
        let piece = self.active?;
        Some(landing_projection(&piece.shape, piece.position, &self.board))
    }

    /// Totals once the game is over
    pub fn final_result(&self) -> Option<GameResult> {
        (self.status == GameStatus::GameOver).then_some(GameResult {
            score: self.score,
            level: self.level,
            lines: self.lines,
        })
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board.clone_from(&self.board);
        out.active = self.active;
        out.ghost = self.ghost_position();
        out.next_kind = self.next_kind;
        out.status = self.status;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take the notifications of the most recent operation, oldest first.
    ///
    /// Every public operation discards notifications nobody drained, so the
    /// queue never holds more than one operation's worth.
    pub fn drain_events(&mut self) -> arrayvec::Drain<'_, GameEvent, MAX_PENDING_EVENTS> {
        self.events.drain(..)
    }

    /// Number of notifications waiting to be drained
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Reset everything and begin a new game. Valid from any status.
    pub fn start(&mut self) {
        self.events.clear();
        self.board = Board::new();
        self.active = None;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.next_kind = Some(self.source.next_kind());
        self.status = GameStatus::Playing;
        self.emit(GameEvent::Start);
        info!("game started");

        if self.spawn_next() {
            self.scheduler.arm();
        }
    }

    /// Same as [`start`](Self::start); board and pieces are recreated
    pub fn restart(&mut self) {
        self.start();
    }

    /// Gravity step: move down one row, or lock when resting on something
    pub fn tick(&mut self) -> bool {
        self.events.clear();
        if !self.is_playing() {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };

        match translate(&piece.shape, piece.position, &self.board, 0, 1) {
            Some(position) => {
                self.active = Some(ActivePiece { position, ..piece });
            }
            None => self.lock_and_advance(),
        }
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(-1, 0, GameEvent::Move)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(1, 0, GameEvent::Move)
    }

    /// One row down under player control. Never locks.
    pub fn soft_drop(&mut self) -> bool {
        self.shift(0, 1, GameEvent::SoftDrop)
    }

    pub fn rotate_cw(&mut self) -> bool {
        self.turn(Direction::Cw)
    }

    pub fn rotate_ccw(&mut self) -> bool {
        self.turn(Direction::Ccw)
    }

    /// Drop to the landing position and lock immediately
    pub fn hard_drop(&mut self) -> bool {
        self.events.clear();
        if !self.is_playing() {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };

        let position = landing_projection(&piece.shape, piece.position, &self.board);
        self.active = Some(ActivePiece { position, ..piece });
        self.emit(GameEvent::HardDrop);
        self.lock_and_advance();
        true
    }

    /// `Playing -> Paused`; cancels the drop scheduler
    pub fn pause(&mut self) -> bool {
        self.events.clear();
        if self.status != GameStatus::Playing {
            return false;
        }
        self.status = GameStatus::Paused;
        self.scheduler.stop();
        self.emit(GameEvent::Pause);
        debug!("paused at score {}", self.score);
        true
    }

    /// `Paused -> Playing`; the next frame becomes the new drop reference
    pub fn resume(&mut self) -> bool {
        self.events.clear();
        if self.status != GameStatus::Paused {
            return false;
        }
        self.status = GameStatus::Playing;
        self.scheduler.arm();
        self.emit(GameEvent::Resume);
        debug!("resumed");
        true
    }

    /// Single pause key: pause when playing, resume when paused
    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Playing => self.pause(),
            GameStatus::Paused => self.resume(),
            GameStatus::Idle | GameStatus::GameOver => false,
        }
    }

    /// Per-frame poll: runs one gravity tick when the level's interval has
    /// elapsed since the last drop. Returns whether a tick ran.
    pub fn frame(&mut self, now_ms: u64) -> bool {
        self.events.clear();
        if !self.is_playing() {
            return false;
        }
        if self.scheduler.poll(now_ms, self.drop_interval_ms()) {
            self.tick()
        } else {
            false
        }
    }

    fn shift(&mut self, dx: i8, dy: i8, event: GameEvent) -> bool {
        self.events.clear();
        if !self.is_playing() {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };

        match translate(&piece.shape, piece.position, &self.board, dx, dy) {
            Some(position) => {
                self.active = Some(ActivePiece { position, ..piece });
                self.emit(event);
                true
            }
            None => false,
        }
    }

    fn turn(&mut self, direction: Direction) -> bool {
        self.events.clear();
        if !self.is_playing() {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };

        match rotate(&piece.shape, piece.position, &self.board, direction) {
            Some((shape, position)) => {
                self.active = Some(ActivePiece {
                    shape,
                    position,
                    ..piece
                });
                self.emit(GameEvent::Rotate);
                true
            }
            None => false,
        }
    }

    /// Lock the active piece, clear lines, score, then spawn the next piece
    fn lock_and_advance(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        let locked = lock(&piece.shape, piece.position, piece.kind, &self.board);
        self.emit(GameEvent::Lock);

        let completed = locked.completed_rows();
        if completed.is_empty() {
            self.board = locked;
        } else {
            self.board = locked.cleared(&completed);

            let rows = completed.len() as u32;
            let points = points_for_clear(rows, self.level);
            self.score = self.score.saturating_add(points);
            self.lines = self.lines.saturating_add(rows);
            self.emit(GameEvent::LineClear { rows: rows as u8 });
            debug!("cleared {} rows for {} points", rows, points);

            let new_level = level_for(self.lines);
            if new_level > self.level {
                self.level = new_level;
                self.emit(GameEvent::LevelUp { level: new_level });
                debug!("level up to {}", new_level);
            }
        }

        self.spawn_next();
    }

    /// Spawn the pending next piece. Ends the game if it does not fit.
    fn spawn_next(&mut self) -> bool {
        let kind = match self.next_kind {
            Some(kind) => kind,
            None => self.source.next_kind(),
        };
        let piece = ActivePiece::spawn(kind);

        if check_spawn_collision(&piece.shape, &self.board) {
            self.game_over();
            return false;
        }

        self.active = Some(piece);
        self.next_kind = Some(self.source.next_kind());
        true
    }

    fn emit(&mut self, event: GameEvent) {
        if self.events.try_push(event).is_err() {
            debug!("event queue full, dropped {:?}", event);
        }
    }

    fn game_over(&mut self) {
        self.status = GameStatus::GameOver;
        self.active = None;
        self.scheduler.stop();
        self.emit(GameEvent::GameOver);
        info!(
            "game over: score {} level {} lines {}",
            self.score, self.level, self.lines
        );
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
