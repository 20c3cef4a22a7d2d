// crates/db/src/stats.rs
//! Stats aggregator: running totals, the per-day minute histogram, and the
//! consecutive-day streak, updated on every completed focus session.

use chrono::Utc;
use focusgrove_core::histogram::day_key;
use focusgrove_core::streak::{consecutive_days_ending, finished_day_set, STREAK_HISTORY_LIMIT};
use focusgrove_core::{CompletedSession, UserId, UserStats};

use crate::{Database, DbResult};

impl Database {
    /// Current stats for a user, lazily materializing a zeroed record when
    /// none has been persisted yet. Pure read.
    pub async fn get_stats_for_user(&self, user_id: UserId) -> DbResult<UserStats> {
        Ok(self
            .find_stats_by_user_id(user_id)
            .await?
            .unwrap_or_else(|| UserStats::empty(user_id)))
    }

    /// Direct delta adjustment for callers that already know the deltas.
    ///
    /// Bypasses histogram, streak, and XP recomputation. An absent delta
    /// leaves that field unchanged.
    pub async fn update_stats(
        &self,
        user_id: UserId,
        add_focus_seconds: Option<i64>,
        add_pomodoros: Option<i64>,
    ) -> DbResult<UserStats> {
        let mut stats = self.get_stats_for_user(user_id).await?;
        if let Some(seconds) = add_focus_seconds {
            stats.total_focus_seconds += seconds;
        }
        if let Some(count) = add_pomodoros {
            stats.pomodoro_count += count;
        }
        stats.updated_at = Utc::now().timestamp();
        self.upsert_user_stats(&stats).await?;
        Ok(stats)
    }

    /// Consecutive-day streak derived from the most recent finished
    /// sessions. Always rebuilt from history; the stored `daily_streak`
    /// column is only a cached projection of this value.
    pub async fn current_streak(&self, user_id: UserId) -> DbResult<i64> {
        let sessions = self
            .find_recent_finished_sessions(user_id, STREAK_HISTORY_LIMIT)
            .await?;
        let days = finished_day_set(&sessions);
        Ok(consecutive_days_ending(&days, Utc::now().date_naive()))
    }

    /// Apply one completed focus session to the user's stats, then hand the
    /// earned minutes to the progression engine.
    ///
    /// Malformed events (missing user id, missing end timestamp, or a
    /// non-positive duration) are silent no-ops. Callers must serialize
    /// invocations for the same user: the read-modify-write here is not
    /// safe under unsynchronized concurrent updates. The stats write
    /// commits before the XP write and is not rolled back if the XP write
    /// fails.
    pub async fn apply_completed_session(&self, event: &CompletedSession) -> DbResult<()> {
        let (user_id, ended_at) = match (event.user_id, event.ended_at) {
            (Some(user_id), Some(ended_at)) if event.duration_seconds > 0 => (user_id, ended_at),
            _ => return Ok(()),
        };

        let mut stats = self.get_stats_for_user(user_id).await?;
        stats.total_focus_seconds += event.duration_seconds;
        stats.pomodoro_count += 1;

        // Whole minutes only: a sub-minute session contributes 0 to the
        // histogram and XP but still counts toward seconds and the count.
        let added_minutes = (event.duration_seconds / 60).max(0);
        *stats.by_day.entry(day_key(ended_at)).or_insert(0) += added_minutes;

        stats.daily_streak = self.current_streak(user_id).await?;
        stats.updated_at = Utc::now().timestamp();
        self.upsert_user_stats(&stats).await?;

        self.apply_xp_and_level(user_id, added_minutes).await
    }
}
