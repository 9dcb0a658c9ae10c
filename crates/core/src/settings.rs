//! Player-tunable settings.
//!
//! | Field                   | Range    | Default |
//! |-------------------------|----------|---------|
//! | `das_delay_ms`          | 0..=500  | 150     |
//! | `arr_ms`                | 0..=200  | 50      |
//! | `soft_drop_interval_ms` | 0..=200  | 50      |
//! | `volume`                | 0..=100  | 100     |

use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_ARR_MS, DEFAULT_DAS_MS, SOFT_DROP_ARR_MS};

pub const MAX_DAS_MS: u32 = 500;
pub const MAX_ARR_MS: u32 = 200;
pub const MAX_SOFT_DROP_MS: u32 = 200;
pub const MAX_VOLUME: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub das_delay_ms: u32,
    pub arr_ms: u32,
    pub soft_drop_interval_ms: u32,
    /// Percent
    pub volume: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            das_delay_ms: DEFAULT_DAS_MS,
            arr_ms: DEFAULT_ARR_MS,
            soft_drop_interval_ms: SOFT_DROP_ARR_MS,
            volume: MAX_VOLUME,
        }
    }
}

fn clamp_raw(value: i64, max: u32) -> u32 {
    value.clamp(0, i64::from(max)) as u32
}

impl Settings {
    /// Build from unchecked values, clamping each into its range
    pub fn from_raw(das_delay_ms: i64, arr_ms: i64, soft_drop_interval_ms: i64, volume: i64) -> Self {
        Self {
            das_delay_ms: clamp_raw(das_delay_ms, MAX_DAS_MS),
            arr_ms: clamp_raw(arr_ms, MAX_ARR_MS),
            soft_drop_interval_ms: clamp_raw(soft_drop_interval_ms, MAX_SOFT_DROP_MS),
            volume: clamp_raw(volume, u32::from(MAX_VOLUME)) as u8,
        }
    }

    /// Copy with every field pulled back into range (e.g. after loading a
    /// hand-edited file)
    pub fn sanitized(self) -> Self {
        Self {
            das_delay_ms: self.das_delay_ms.min(MAX_DAS_MS),
            arr_ms: self.arr_ms.min(MAX_ARR_MS),
            soft_drop_interval_ms: self.soft_drop_interval_ms.min(MAX_SOFT_DROP_MS),
            volume: self.volume.min(MAX_VOLUME),
        }
    }

    pub fn is_muted(&self) -> bool {
        self.volume == 0
    }

    /// Volume as a 0.0..=1.0 gain
    pub fn gain(&self) -> f32 {
        f32::from(self.volume) / f32::from(MAX_VOLUME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.das_delay_ms, 150);
        assert_eq!(s.arr_ms, 50);
        assert_eq!(s.soft_drop_interval_ms, 50);
        assert_eq!(s.volume, 100);
        assert!(!s.is_muted());
    }

    #[test]
    fn test_from_raw_clamps() {
        let s = Settings::from_raw(-5, 1_000, 201, 250);
        assert_eq!(s.das_delay_ms, 0);
        assert_eq!(s.arr_ms, 200);
        assert_eq!(s.soft_drop_interval_ms, 200);
        assert_eq!(s.volume, 100);

        let s = Settings::from_raw(500, 0, 10, 0);
        assert_eq!(s.das_delay_ms, 500);
        assert_eq!(s.arr_ms, 0);
        assert_eq!(s.soft_drop_interval_ms, 10);
        assert!(s.is_muted());
    }

    #[test]
    fn test_sanitized() {
        let s = Settings {
            das_delay_ms: 9_999,
            arr_ms: 20,
            soft_drop_interval_ms: 300,
            volume: 255,
        }
        .sanitized();
        assert_eq!(s, Settings::from_raw(500, 20, 200, 100));
    }

    #[test]
    fn test_gain() {
        assert_eq!(Settings::from_raw(0, 0, 0, 50).gain(), 0.5);
        assert_eq!(Settings::default().gain(), 1.0);
    }
}
