// crates/db/src/progression.rs
//! Progression engine: converts earned focus minutes into XP and applies
//! the leveling curve to the user record.

use focusgrove_core::UserId;

use crate::{Database, DbResult};

impl Database {
    /// Award XP for `duration_minutes` of focus and persist the user's
    /// updated progression. No-op for non-positive minutes or an unknown
    /// user; absent progression fields default via `Progression::default`.
    pub async fn apply_xp_and_level(
        &self,
        user_id: UserId,
        duration_minutes: i64,
    ) -> DbResult<()> {
        if duration_minutes <= 0 {
            return Ok(());
        }
        let Some(mut user) = self.find_user_by_id(user_id).await? else {
            return Ok(());
        };
        user.progression.award_minutes(duration_minutes);
        self.save_user_progression(user_id, &user.progression).await
    }
}
