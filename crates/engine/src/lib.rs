//! Engine module - per-frame driver around a game session
//!
//! The engine is the only place where input, gravity and audio meet:
//!
//! ```text
//! key edges ──► InputConditioner ──► GameSession ──► GameEvent ──► AudioSink
//!                     ▲                   ▲
//!                     └──── frame(now) ───┘
//! ```
//!
//! All calls happen on one thread; the caller supplies monotonic timestamps.

pub mod audio;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_types as types;

pub use audio::{AudioSink, NullAudio};

use log::debug;

use blockfall_core::rng::{PieceSource, UniformSource};
use blockfall_core::{GameResult, GameSession, GameSnapshot, Settings};
use blockfall_input::InputConditioner;

use crate::types::{DasKey, GameEvent, GameStatus, InputKey};

pub struct Engine<S: PieceSource = UniformSource, A: AudioSink = NullAudio> {
    session: GameSession<S>,
    input: InputConditioner,
    audio: A,
    settings: Settings,
    finished: Option<GameResult>,
}

impl<S: PieceSource, A: AudioSink> Engine<S, A> {
    pub fn new(session: GameSession<S>, audio: A, settings: Settings) -> Self {
        let mut engine = Self {
            session,
            input: InputConditioner::new(),
            audio,
            settings,
            finished: None,
        };
        engine.apply_settings(settings);
        engine
    }

    /// Replace the input conditioner (e.g. to enable a release timeout)
    pub fn with_input(mut self, mut input: InputConditioner) -> Self {
        input.apply_settings(&self.settings);
        self.input = input;
        self
    }

    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession<S> {
        &mut self.session
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn status(&self) -> GameStatus {
        self.session.status()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.session.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.session.snapshot_into(out);
    }

    pub fn apply_settings(&mut self, settings: Settings) {
        let settings = settings.sanitized();
        self.settings = settings;
        self.input.apply_settings(&settings);
        self.audio.set_volume(settings.volume);
        debug!(
            "settings applied: das={} arr={} soft_drop={} volume={}",
            settings.das_delay_ms, settings.arr_ms, settings.soft_drop_interval_ms, settings.volume
        );
    }

    /// Key-down edge from the platform
    pub fn key_down(&mut self, key: InputKey, now_ms: u64) {
        if let Some(trigger) = self.input.key_down(key, now_ms) {
            self.dispatch(trigger);
            self.flush_events();
        }
    }

    pub fn key_up(&mut self, key: InputKey) {
        self.input.key_up(key);
    }

    /// Per-frame poll: input repeats, then gravity. Events reach the audio
    /// sink after each step since the session keeps only the latest
    /// operation's events.
    pub fn frame(&mut self, now_ms: u64) {
        for key in self.input.process_input(now_ms) {
            self.dispatch(InputKey::Das(key));
            self.flush_events();
        }
        self.session.frame(now_ms);
        self.flush_events();
    }

    /// Result of a game that ended since the last call
    pub fn take_finished_game(&mut self) -> Option<GameResult> {
        self.finished.take()
    }

    fn dispatch(&mut self, key: InputKey) {
        match key {
            InputKey::Das(DasKey::Left) => {
                self.session.move_left();
            }
            InputKey::Das(DasKey::Right) => {
                self.session.move_right();
            }
            InputKey::Das(DasKey::SoftDrop) => {
                self.session.soft_drop();
            }
            InputKey::RotateCw => {
                self.session.rotate_cw();
            }
            InputKey::RotateCcw => {
                self.session.rotate_ccw();
            }
            InputKey::HardDrop => {
                self.session.hard_drop();
            }
            InputKey::Pause => {
                self.session.toggle_pause();
            }
            InputKey::Start => match self.session.status() {
                GameStatus::Idle | GameStatus::GameOver => self.session.start(),
                GameStatus::Playing | GameStatus::Paused => self.session.restart(),
            },
        }
    }

    fn flush_events(&mut self) {
        let mut release_keys = false;
        let mut game_over = false;
        for event in self.session.drain_events() {
            match event {
                GameEvent::Pause => release_keys = true,
                GameEvent::GameOver => game_over = true,
                _ => {}
            }
            self.audio.play(event);
        }
        if game_over {
            self.finished = self.session.final_result();
        }
        if release_keys || game_over {
            self.input.reset();
        }
    }
}
