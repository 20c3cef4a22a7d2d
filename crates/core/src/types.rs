// crates/core/src/types.rs
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::leveling::Progression;

/// Identity key for a user record.
pub type UserId = i64;

/// A user account with its progression fields.
///
/// Account lifecycle (creation, profile fields, deletion) is owned by user
/// management; the progression engine only mutates `progression`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(flatten)]
    pub progression: Progression,
    pub created_at: i64,
}

/// Lifecycle state of a focus session record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Running,
    Finished,
    Abandoned,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Running => "running",
            SessionStatus::Finished => "finished",
            SessionStatus::Abandoned => "abandoned",
        }
    }

    /// Decode a stored status column. Unknown text maps to `Running` so it
    /// never counts as finished.
    pub fn from_column(s: &str) -> Self {
        match s {
            "finished" => SessionStatus::Finished,
            "abandoned" => SessionStatus::Abandoned,
            _ => SessionStatus::Running,
        }
    }
}

/// A focus session as read back from session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusSession {
    pub user_id: UserId,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub duration_seconds: Option<i64>,
    pub status: SessionStatus,
}

impl FocusSession {
    /// The instant the session effectively ended: the recorded end, or
    /// `start + duration` when only those are present.
    pub fn effective_end(&self) -> Option<DateTime<Utc>> {
        if let Some(end) = self.end_at {
            return Some(end);
        }
        match (self.start_at, self.duration_seconds) {
            (Some(start), Some(secs)) => {
                Duration::try_seconds(secs).and_then(|d| start.checked_add_signed(d))
            }
            _ => None,
        }
    }
}

/// Completed-session event emitted by the session-completion detector.
///
/// Transient; never persisted here. Fields are optional where the
/// upstream detector cannot vouch for them; validation happens at
/// application time and malformed events are dropped silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedSession {
    pub user_id: Option<UserId>,
    pub ended_at: Option<DateTime<Utc>>,
    pub duration_seconds: i64,
}

/// Per-user aggregate statistics, created lazily on first access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub user_id: UserId,
    pub total_focus_seconds: i64,
    pub pomodoro_count: i64,
    /// Focus minutes per UTC calendar day, keyed `YYYY-MM-DD`.
    pub by_day: BTreeMap<String, i64>,
    /// Consecutive days with a finished session, ending today. Cached
    /// projection of session history, rebuilt rather than incremented.
    pub daily_streak: i64,
    pub updated_at: i64,
}

impl UserStats {
    /// Zeroed record materialized on first access for a user.
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            total_focus_seconds: 0,
            pomodoro_count: 0,
            by_day: BTreeMap::new(),
            daily_streak: 0,
            updated_at: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn session(
        start_at: Option<DateTime<Utc>>,
        end_at: Option<DateTime<Utc>>,
        duration_seconds: Option<i64>,
    ) -> FocusSession {
        FocusSession {
            user_id: 1,
            start_at,
            end_at,
            duration_seconds,
            status: SessionStatus::Finished,
        }
    }

    #[test]
    fn test_effective_end_prefers_recorded_end() {
        let start = Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 8, 1, 9, 25, 0).unwrap();
        let s = session(Some(start), Some(end), Some(9999));
        assert_eq!(s.effective_end(), Some(end));
    }

    #[test]
    fn test_effective_end_derived_from_start_plus_duration() {
        let start = Utc.with_ymd_and_hms(2026, 8, 1, 23, 50, 0).unwrap();
        let s = session(Some(start), None, Some(1500));
        // 23:50 + 25 min crosses midnight into Aug 2
        let end = s.effective_end().unwrap();
        assert_eq!(end.date_naive().to_string(), "2026-08-02");
    }

    #[test]
    fn test_effective_end_missing_when_underivable() {
        let start = Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap();
        assert_eq!(session(Some(start), None, None).effective_end(), None);
        assert_eq!(session(None, None, Some(1500)).effective_end(), None);
        assert_eq!(session(None, None, None).effective_end(), None);
    }

    #[test]
    fn test_session_status_column_round_trip() {
        for status in [
            SessionStatus::Running,
            SessionStatus::Finished,
            SessionStatus::Abandoned,
        ] {
            assert_eq!(SessionStatus::from_column(status.as_str()), status);
        }
        assert_eq!(SessionStatus::from_column("paused"), SessionStatus::Running);
    }

    #[test]
    fn test_user_stats_serializes_camel_case() {
        let stats = UserStats::empty(7);
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"userId\":7"));
        assert!(json.contains("\"totalFocusSeconds\":0"));
        assert!(json.contains("\"pomodoroCount\":0"));
        assert!(json.contains("\"dailyStreak\":0"));
    }
}
