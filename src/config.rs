//! Runtime configuration from environment variables.
//!
//! | Variable                       | Default      |
//! |--------------------------------|--------------|
//! | `BLOCKFALL_DATA_DIR`           | `.blockfall` |
//! | `BLOCKFALL_SEED`               | random       |
//! | `BLOCKFALL_FRAME_MS`           | 16           |
//! | `BLOCKFALL_PLAYER`             | last saved   |
//! | `BLOCKFALL_LOG_PATH`           | no logging   |
//! | `BLOCKFALL_RELEASE_TIMEOUT_MS` | 150 (0 = off)|
//! | `BLOCKFALL_CLEAR_LEADERBOARD`  | off          |

use std::path::PathBuf;

use crate::types::FRAME_MS;

pub const DEFAULT_DATA_DIR: &str = ".blockfall";
pub const DEFAULT_RELEASE_TIMEOUT_MS: u64 = 150;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub data_dir: PathBuf,
    pub seed: Option<u64>,
    pub frame_ms: u64,
    pub player: Option<String>,
    pub log_path: Option<String>,
    /// Key release timeout for terminals without release events
    pub release_timeout_ms: Option<u64>,
    /// Empty the stored leaderboard before playing
    pub clear_leaderboard: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            seed: None,
            frame_ms: u64::from(FRAME_MS),
            player: None,
            log_path: None,
            release_timeout_ms: Some(DEFAULT_RELEASE_TIMEOUT_MS),
            clear_leaderboard: false,
        }
    }
}

fn is_truthy(value: Option<String>) -> bool {
    matches!(
        value.as_deref().map(str::trim).map(str::to_ascii_lowercase).as_deref(),
        Some("1" | "true" | "yes")
    )
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source. Unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let data_dir = non_empty(lookup("BLOCKFALL_DATA_DIR"))
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let seed = lookup("BLOCKFALL_SEED").and_then(|s| s.trim().parse().ok());

        let frame_ms = lookup("BLOCKFALL_FRAME_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(defaults.frame_ms);

        let release_timeout_ms = match lookup("BLOCKFALL_RELEASE_TIMEOUT_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
        {
            Some(0) => None,
            Some(ms) => Some(ms),
            None => defaults.release_timeout_ms,
        };

        Self {
            data_dir,
            seed,
            frame_ms,
            player: non_empty(lookup("BLOCKFALL_PLAYER")),
            log_path: non_empty(lookup("BLOCKFALL_LOG_PATH")),
            release_timeout_ms,
            clear_leaderboard: is_truthy(lookup("BLOCKFALL_CLEAR_LEADERBOARD")),
        }
    }

    pub fn leaderboard_path(&self) -> PathBuf {
        self.data_dir.join("leaderboard.json")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join("settings.json")
    }

    pub fn player_path(&self) -> PathBuf {
        self.data_dir.join("player.json")
    }
}
