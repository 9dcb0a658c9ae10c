//! Terminal bell audio sink.

use std::io::{self, Write};

use crate::engine::AudioSink;
use crate::types::GameEvent;

/// Rings the terminal bell for the few events worth an audible cue.
pub struct BellAudio<W: Write> {
    out: W,
    volume: u8,
}

impl BellAudio<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> BellAudio<W> {
    pub fn new(out: W) -> Self {
        Self { out, volume: 100 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn rings(event: GameEvent) -> bool {
    matches!(
        event,
        GameEvent::LineClear { .. } | GameEvent::LevelUp { .. } | GameEvent::GameOver
    )
}

impl<W: Write> AudioSink for BellAudio<W> {
    fn play(&mut self, event: GameEvent) {
        if self.volume == 0 || !rings(event) {
            return;
        }
        // Playback failures are dropped.
        let _ = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
    }

    fn set_volume(&mut self, volume: u8) {
        self.volume = volume;
    }
}
