//! Session-history store: append session records, read back recent
//! finished sessions for streak derivation.

use crate::{Database, DbResult};
use chrono::{DateTime, Utc};
use focusgrove_core::{FocusSession, SessionStatus, UserId};

impl Database {
    /// Append a session record to history.
    pub async fn insert_session(
        &self,
        user_id: UserId,
        start_at: Option<DateTime<Utc>>,
        end_at: Option<DateTime<Utc>>,
        duration_seconds: Option<i64>,
        status: SessionStatus,
    ) -> DbResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO focus_sessions (user_id, start_at, end_at, duration_seconds, status)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(user_id)
        .bind(start_at.map(|t| t.timestamp()))
        .bind(end_at.map(|t| t.timestamp()))
        .bind(duration_seconds)
        .bind(status.as_str())
        .execute(self.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// The most recent finished sessions for a user, newest first, capped
    /// at `limit`.
    pub async fn find_recent_finished_sessions(
        &self,
        user_id: UserId,
        limit: i64,
    ) -> DbResult<Vec<FocusSession>> {
        let rows: Vec<(i64, Option<i64>, Option<i64>, Option<i64>, String)> = sqlx::query_as(
            r#"
            SELECT user_id, start_at, end_at, duration_seconds, status
            FROM focus_sessions
            WHERE user_id = ?1 AND status = ?2
            ORDER BY start_at DESC
            LIMIT ?3
            "#,
        )
        .bind(user_id)
        .bind(SessionStatus::Finished.as_str())
        .bind(limit)
        .fetch_all(self.pool())
        .await?;

        Ok(rows
            .into_iter()
            .map(
                |(user_id, start_at, end_at, duration_seconds, status)| FocusSession {
                    user_id,
                    start_at: start_at.and_then(|s| DateTime::from_timestamp(s, 0)),
                    end_at: end_at.and_then(|s| DateTime::from_timestamp(s, 0)),
                    duration_seconds,
                    status: SessionStatus::from_column(&status),
                },
            )
            .collect())
    }
}
