//! Audio seam.
//!
//! The engine forwards every [`GameEvent`] to an [`AudioSink`] and never waits
//! on it; a sink that cannot play a sound just drops it.

use crate::types::GameEvent;

pub trait AudioSink {
    /// Fire-and-forget playback of the sound named by `event.as_str()`
    fn play(&mut self, event: GameEvent);

    /// Volume in percent (0..=100)
    fn set_volume(&mut self, volume: u8);
}

/// Sink that discards everything (headless runs, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _event: GameEvent) {}

    fn set_volume(&mut self, _volume: u8) {}
}

impl<A: AudioSink + ?Sized> AudioSink for Box<A> {
    fn play(&mut self, event: GameEvent) {
        (**self).play(event);
    }

    fn set_volume(&mut self, volume: u8) {
        (**self).set_volume(volume);
    }
}
