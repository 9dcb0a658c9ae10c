//! Scoring module - points, levels and gravity speed
//!
//! Scoring is the flat rule `rows * 100 * level`: a four-row clear is worth
//! exactly four single clears. There is no tiered (100/300/500/800) table.

use crate::types::{BASE_DROP_MS, DROP_STEP_MS, LINES_PER_LEVEL, MIN_DROP_MS, POINTS_PER_ROW};

/// Points awarded for clearing `rows` rows at `level`
pub fn points_for_clear(rows: u32, level: u32) -> u32 {
    rows.saturating_mul(POINTS_PER_ROW).saturating_mul(level)
}

/// Level reached after `total_lines` cleared lines (starts at 1)
pub fn level_for(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level in milliseconds.
///
/// Linear from 1000ms at level 1, 50ms faster per level, floored at 100ms.
pub fn drop_interval_ms(level: u32) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS.saturating_sub(reduction).max(MIN_DROP_MS)
}

/// Whether `score` beats the best recorded score
pub fn is_new_high_score(score: u32, best: Option<u32>) -> bool {
    score > 0 && best.map_or(true, |best| score > best)
}
