/// Inline SQL migrations for the focusgrove database schema.
///
/// We use simple inline migrations rather than sqlx migration files
/// because the schema is small and self-contained.

pub const MIGRATIONS: &[&str] = &[
    // Migration 1: users table (identity + progression fields)
    r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    level INTEGER NOT NULL DEFAULT 1,
    current_xp INTEGER NOT NULL DEFAULT 0,
    xp_to_next_level INTEGER NOT NULL DEFAULT 100,
    created_at INTEGER NOT NULL
);
"#,
    // Migration 2: focus session history
    r#"
CREATE TABLE IF NOT EXISTS focus_sessions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    start_at INTEGER,
    end_at INTEGER,
    duration_seconds INTEGER,
    status TEXT NOT NULL DEFAULT 'running'
);
"#,
    // Migration 3: index backing the bounded streak scan
    r#"
CREATE INDEX IF NOT EXISTS idx_focus_sessions_user_status_start
    ON focus_sessions(user_id, status, start_at DESC);
"#,
    // Migration 4: per-user aggregate stats
    r#"
CREATE TABLE IF NOT EXISTS user_stats (
    user_id INTEGER PRIMARY KEY,
    total_focus_seconds INTEGER NOT NULL DEFAULT 0,
    pomodoro_count INTEGER NOT NULL DEFAULT 0,
    by_day_json TEXT NOT NULL DEFAULT '{}',
    daily_streak INTEGER NOT NULL DEFAULT 0,
    updated_at INTEGER NOT NULL DEFAULT 0
);
"#,
];
