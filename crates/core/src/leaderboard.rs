//! High-score table.
//!
//! Entries are kept sorted by score, highest first, and truncated to
//! [`LEADERBOARD_CAPACITY`]. Ties keep insertion order.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::{Store, StoreError};
use crate::types::LEADERBOARD_CAPACITY;

pub const ANONYMOUS: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: String,
    pub player_name: String,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    /// Unix epoch milliseconds
    pub date_ms: u64,
}

impl LeaderboardEntry {
    pub fn new(player_name: &str, score: u32, level: u32, lines: u32, date_ms: u64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            player_name: normalize_name(player_name),
            score,
            level,
            lines,
            date_ms,
        }
    }
}

/// Trimmed name, or [`ANONYMOUS`] when blank
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        ANONYMOUS.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Stored as a plain JSON array. Loading goes through
/// [`Leaderboard::from_entries`], so hand-edited files are re-sorted and capped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<LeaderboardEntry>", into = "Vec<LeaderboardEntry>")]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl From<Vec<LeaderboardEntry>> for Leaderboard {
    fn from(entries: Vec<LeaderboardEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<Leaderboard> for Vec<LeaderboardEntry> {
    fn from(board: Leaderboard) -> Self {
        board.entries
    }
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary entries (e.g. a loaded file), restoring order and capacity
    pub fn from_entries(mut entries: Vec<LeaderboardEntry>) -> Self {
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(LEADERBOARD_CAPACITY);
        Self { entries }
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn high_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Whether a score would make the table
    pub fn qualifies(&self, score: u32) -> bool {
        self.entries.len() < LEADERBOARD_CAPACITY
            || self.entries.last().map_or(true, |last| score > last.score)
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Insert and return the 0-based rank, or `None` if it fell off the table
    pub fn insert(&mut self, entry: LeaderboardEntry) -> Option<usize> {
        let rank = self.entries.partition_point(|e| e.score >= entry.score);
        if rank >= LEADERBOARD_CAPACITY {
            return None;
        }
        self.entries.insert(rank, entry);
        self.entries.truncate(LEADERBOARD_CAPACITY);
        Some(rank)
    }
}

/// Load the table (empty when missing), insert, and save it back.
pub fn record_score<S>(store: &S, entry: LeaderboardEntry) -> Result<Option<usize>, StoreError>
where
    S: Store<Leaderboard> + ?Sized,
{
    let mut board = store.load()?.unwrap_or_default();

    let score = entry.score;
    let rank = board.insert(entry);
    match rank {
        Some(rank) => {
            store.save(&board)?;
            debug!("recorded score {} at rank {}", score, rank + 1);
        }
        None => warn!("score {} did not qualify for the leaderboard", score),
    }
    Ok(rank)
}

/// Replace the stored table with an empty one.
pub fn clear_leaderboard<S>(store: &S) -> Result<(), StoreError>
where
    S: Store<Leaderboard> + ?Sized,
{
    store.save(&Leaderboard::new())?;
    info!("leaderboard cleared");
    Ok(())
}
