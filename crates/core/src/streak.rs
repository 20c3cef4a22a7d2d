// crates/core/src/streak.rs
//! Consecutive-day streak derivation over recent session history.
//!
//! The streak is always rebuilt from the authoritative session list rather
//! than incremented in place, so it self-heals after retries or
//! out-of-order event delivery.

use chrono::NaiveDate;
use std::collections::HashSet;

use crate::types::FocusSession;

/// How many recent finished sessions the streak derivation considers.
/// Bounds the history scan as a user's session count grows.
pub const STREAK_HISTORY_LIMIT: i64 = 1000;

/// Distinct UTC calendar days on which at least one session ended.
///
/// Sessions with no derivable end instant are discarded.
pub fn finished_day_set(sessions: &[FocusSession]) -> HashSet<NaiveDate> {
    sessions
        .iter()
        .filter_map(|s| s.effective_end())
        .map(|end| end.date_naive())
        .collect()
}

/// Count consecutive days present in `days`, walking backward from `today`.
///
/// Stops at the first missing day, so the count is 0 whenever `today`
/// itself has no session; yesterday's history alone never keeps a streak
/// alive.
pub fn consecutive_days_ending(days: &HashSet<NaiveDate>, today: NaiveDate) -> i64 {
    let mut streak = 0;
    let mut day = today;
    while days.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    streak
}
