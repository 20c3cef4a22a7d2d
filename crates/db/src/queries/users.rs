//! User store: identity lookup and progression-field persistence.

use crate::{Database, DbResult};
use chrono::Utc;
use focusgrove_core::{Progression, User, UserId};

impl Database {
    /// Insert a user with fresh progression defaults.
    pub async fn create_user(&self, username: &str) -> DbResult<User> {
        let created_at = Utc::now().timestamp();
        let progression = Progression::default();
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, level, current_xp, xp_to_next_level, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(username)
        .bind(progression.level)
        .bind(progression.current_xp)
        .bind(progression.xp_to_next_level)
        .bind(created_at)
        .execute(self.pool())
        .await?;

        Ok(User {
            id: result.last_insert_rowid(),
            username: username.to_string(),
            progression,
            created_at,
        })
    }

    /// Look up a user by id.
    pub async fn find_user_by_id(&self, id: UserId) -> DbResult<Option<User>> {
        let row: Option<(i64, String, i64, i64, i64, i64)> = sqlx::query_as(
            r#"
            SELECT id, username, level, current_xp, xp_to_next_level, created_at
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(row.map(
            |(id, username, level, current_xp, xp_to_next_level, created_at)| User {
                id,
                username,
                progression: Progression {
                    level,
                    current_xp,
                    xp_to_next_level,
                },
                created_at,
            },
        ))
    }

    /// Persist a user's progression fields.
    pub async fn save_user_progression(
        &self,
        id: UserId,
        progression: &Progression,
    ) -> DbResult<()> {
        sqlx::query(
            "UPDATE users SET level = ?1, current_xp = ?2, xp_to_next_level = ?3 WHERE id = ?4",
        )
        .bind(progression.level)
        .bind(progression.current_xp)
        .bind(progression.xp_to_next_level)
        .bind(id)
        .execute(self.pool())
        .await?;
        Ok(())
    }
}
