//! DAS/ARR input conditioner.
//!
//! Turns raw key-down/key-up edges into game triggers:
//!
//! - movement keys (left, right, soft drop) fire once on press, then repeat
//!   after a delay at a fixed interval while held;
//! - one-shot keys (rotate, hard drop, pause, start) fire once per press.
//!
//! Timestamps are supplied by the caller in milliseconds. Terminals that never
//! report key releases can enable a release timeout: a key with no key-down
//! for that long is treated as released.

use arrayvec::ArrayVec;

use crate::types::{
    DasKey, InputKey, DEFAULT_ARR_MS, DEFAULT_DAS_MS, ONE_SHOT_KEY_COUNT, SOFT_DROP_ARR_MS,
    SOFT_DROP_DAS_MS,
};
use blockfall_core::Settings;

/// Repeat timing for one DAS key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DasConfig {
    pub delay_ms: u32,
    pub interval_ms: u32,
}

impl DasConfig {
    pub const fn new(delay_ms: u32, interval_ms: u32) -> Self {
        Self {
            delay_ms,
            interval_ms,
        }
    }
}

/// Triggers produced by one [`InputConditioner::process_input`] poll
pub type Repeats = ArrayVec<DasKey, 3>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct KeyState {
    held: bool,
    press_start: u64,
    last_repeat: u64,
    /// Last key-down seen, for the release timeout
    last_seen: u64,
}

#[derive(Debug, Clone)]
pub struct InputConditioner {
    configs: [DasConfig; 3],
    keys: [KeyState; 3],
    /// `Some(last_seen)` while a one-shot key is down
    one_shot: [Option<u64>; ONE_SHOT_KEY_COUNT],
    release_timeout_ms: Option<u64>,
}

impl InputConditioner {
    pub fn new() -> Self {
        Self {
            configs: [
                DasConfig::new(DEFAULT_DAS_MS, DEFAULT_ARR_MS),
                DasConfig::new(DEFAULT_DAS_MS, DEFAULT_ARR_MS),
                DasConfig::new(SOFT_DROP_DAS_MS, SOFT_DROP_ARR_MS),
            ],
            keys: [KeyState::default(); 3],
            one_shot: [None; ONE_SHOT_KEY_COUNT],
            release_timeout_ms: None,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut conditioner = Self::new();
        conditioner.apply_settings(settings);
        conditioner
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    pub fn release_timeout_ms(&self) -> Option<u64> {
        self.release_timeout_ms
    }

    pub fn config(&self, key: DasKey) -> DasConfig {
        self.configs[key.index()]
    }

    pub fn set_config(&mut self, key: DasKey, config: DasConfig) {
        self.configs[key.index()] = config;
    }

    /// Left/right take the player's DAS and ARR; soft drop repeats with no delay.
    pub fn apply_settings(&mut self, settings: &Settings) {
        let horizontal = DasConfig::new(settings.das_delay_ms, settings.arr_ms);
        self.configs[DasKey::Left.index()] = horizontal;
        self.configs[DasKey::Right.index()] = horizontal;
        self.configs[DasKey::SoftDrop.index()] =
            DasConfig::new(SOFT_DROP_DAS_MS, settings.soft_drop_interval_ms);
    }

    pub fn is_held(&self, key: DasKey) -> bool {
        self.keys[key.index()].held
    }

    /// Key-down edge. Returns the immediate trigger, if any.
    ///
    /// Repeated key-downs for a key that is already down (OS auto-repeat)
    /// only refresh the release timeout.
    pub fn key_down(&mut self, key: InputKey, now_ms: u64) -> Option<InputKey> {
        match key {
            InputKey::Das(das) => {
                let state = &mut self.keys[das.index()];
                state.last_seen = now_ms;
                if state.held {
                    return None;
                }
                state.held = true;
                state.press_start = now_ms;
                state.last_repeat = now_ms;
                Some(key)
            }
            other => {
                let idx = other.one_shot_index()?;
                let slot = &mut self.one_shot[idx];
                let was_down = slot.is_some();
                *slot = Some(now_ms);
                (!was_down).then_some(other)
            }
        }
    }

    pub fn key_up(&mut self, key: InputKey) {
        match key {
            InputKey::Das(das) => self.keys[das.index()].held = false,
            other => {
                if let Some(idx) = other.one_shot_index() {
                    self.one_shot[idx] = None;
                }
            }
        }
    }

    /// Per-frame poll. At most one repeat per held key, in left, right,
    /// soft-drop order.
    pub fn process_input(&mut self, now_ms: u64) -> Repeats {
        self.expire_stale(now_ms);

        let mut out = Repeats::new();
        for key in DasKey::ALL {
            let config = self.configs[key.index()];
            let state = &mut self.keys[key.index()];
            if !state.held {
                continue;
            }
            let held_for = now_ms.saturating_sub(state.press_start);
            let since_repeat = now_ms.saturating_sub(state.last_repeat);
            if held_for >= u64::from(config.delay_ms) && since_repeat >= u64::from(config.interval_ms) {
                state.last_repeat = now_ms;
                out.push(key);
            }
        }
        out
    }

    /// Release held movement keys (pause, game over).
    ///
    /// One-shot keys stay down until their key-up so the key that caused the
    /// pause cannot re-trigger from OS auto-repeat.
    pub fn reset(&mut self) {
        self.keys = [KeyState::default(); 3];
    }

    fn expire_stale(&mut self, now_ms: u64) {
        let Some(timeout) = self.release_timeout_ms else {
            return;
        };
        for state in self.keys.iter_mut().filter(|s| s.held) {
            if now_ms.saturating_sub(state.last_seen) > timeout {
                state.held = false;
            }
        }
        for slot in self.one_shot.iter_mut() {
            if matches!(*slot, Some(seen) if now_ms.saturating_sub(seen) > timeout) {
                *slot = None;
            }
        }
    }
}

impl Default for InputConditioner {
    fn default() -> Self {
        Self::new()
    }
}
