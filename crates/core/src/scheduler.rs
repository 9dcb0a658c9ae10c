//! Fixed-interval drop scheduler and clock abstraction.
//!
//! The scheduler is polled once per frame with a monotonic timestamp. It fires
//! at most one gravity tick per poll and then rebases its reference to the
//! poll time, so a badly delayed frame never triggers a multi-row catch-up.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Monotonic millisecond clock
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock backed by [`Instant`], zeroed at construction
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock for tests. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SchedulerState {
    Stopped,
    /// Started; the next poll records the reference timestamp
    Armed,
    Running { last_drop_ms: u64 },
}

/// Gravity cadence driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropScheduler {
    state: SchedulerState,
}

impl DropScheduler {
    pub fn new() -> Self {
        Self {
            state: SchedulerState::Stopped,
        }
    }

    /// Start (or restart) the cadence. The next poll becomes the reference
    /// point, so no drop is owed for time spent before arming.
    pub fn arm(&mut self) {
        self.state = SchedulerState::Armed;
    }

    /// Cancel any pending drop. Polls never fire until re-armed.
    pub fn stop(&mut self) {
        self.state = SchedulerState::Stopped;
    }

    pub fn is_running(&self) -> bool {
        !matches!(self.state, SchedulerState::Stopped)
    }

    /// Timestamp of the last drop (or of arming), if any
    pub fn last_drop_ms(&self) -> Option<u64> {
        match self.state {
            SchedulerState::Running { last_drop_ms } => Some(last_drop_ms),
            _ => None,
        }
    }

    /// Returns true when a drop is due; the reference is then rebased to `now_ms`.
    pub fn poll(&mut self, now_ms: u64, interval_ms: u32) -> bool {
        match self.state {
            SchedulerState::Stopped => false,
            SchedulerState::Armed => {
                self.state = SchedulerState::Running {
                    last_drop_ms: now_ms,
                };
                false
            }
            SchedulerState::Running { last_drop_ms } => {
                if now_ms.saturating_sub(last_drop_ms) >= u64::from(interval_ms) {
                    self.state = SchedulerState::Running {
                        last_drop_ms: now_ms,
                    };
                    true
                } else {
                    false
                }
            }
        }
    }
}

impl Default for DropScheduler {
    fn default() -> Self {
        Self::new()
    }
}
