//! UserStats store: keyed lookup and upsert of the per-user aggregate row.
//!
//! The day histogram crosses this boundary as its flat JSON text encoding;
//! decoding is self-healing (see `focusgrove_core::histogram`).

use crate::{Database, DbResult};
use focusgrove_core::{histogram, UserId, UserStats};

impl Database {
    /// Stored stats row for a user, if one exists.
    pub async fn find_stats_by_user_id(&self, user_id: UserId) -> DbResult<Option<UserStats>> {
        let row: Option<(i64, i64, i64, String, i64, i64)> = sqlx::query_as(
            r#"
            SELECT user_id, total_focus_seconds, pomodoro_count, by_day_json, daily_streak, updated_at
            FROM user_stats
            WHERE user_id = ?1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool())
        .await?;

        Ok(row.map(
            |(user_id, total_focus_seconds, pomodoro_count, by_day_json, daily_streak, updated_at)| {
                UserStats {
                    user_id,
                    total_focus_seconds,
                    pomodoro_count,
                    by_day: histogram::parse_by_day(&by_day_json),
                    daily_streak,
                    updated_at,
                }
            },
        ))
    }

    /// Write a stats record, replacing any existing row for the user.
    pub async fn upsert_user_stats(&self, stats: &UserStats) -> DbResult<()> {
        let by_day_json = histogram::encode_by_day(&stats.by_day);
        sqlx::query(
            r#"
            INSERT INTO user_stats (
                user_id, total_focus_seconds, pomodoro_count,
                by_day_json, daily_streak, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(user_id) DO UPDATE SET
                total_focus_seconds = excluded.total_focus_seconds,
                pomodoro_count = excluded.pomodoro_count,
                by_day_json = excluded.by_day_json,
                daily_streak = excluded.daily_streak,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(stats.user_id)
        .bind(stats.total_focus_seconds)
        .bind(stats.pomodoro_count)
        .bind(&by_day_json)
        .bind(stats.daily_streak)
        .bind(stats.updated_at)
        .execute(self.pool())
        .await?;
        Ok(())
    }
}
