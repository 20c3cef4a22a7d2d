// crates/core/src/leveling.rs
//! XP and level progression.
//!
//! Business-rule constants live here as named values so the curve can be
//! tuned and tested independently of storage.

use serde::{Deserialize, Serialize};

/// XP earned per whole focused minute.
pub const XP_PER_MINUTE: i64 = 10;

/// XP required to go from level 1 to level 2.
pub const BASE_XP_TO_NEXT: i64 = 100;

/// Multiplier applied to the previous level's threshold.
pub const LEVEL_GROWTH_FACTOR: f64 = 1.2;

/// Flat XP added on top of the multiplied threshold.
pub const LEVEL_GROWTH_BONUS: f64 = 50.0;

/// Per-user gamification state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    pub level: i64,
    pub current_xp: i64,
    pub xp_to_next_level: i64,
}

impl Default for Progression {
    fn default() -> Self {
        Self {
            level: 1,
            current_xp: 0,
            xp_to_next_level: BASE_XP_TO_NEXT,
        }
    }
}

/// The XP threshold following the one gated by `threshold`.
/// Strictly increasing for any positive threshold.
pub fn next_requirement(threshold: i64) -> i64 {
    (threshold as f64 * LEVEL_GROWTH_FACTOR + LEVEL_GROWTH_BONUS).round() as i64
}

impl Progression {
    /// Award XP for `minutes` of focus, resolving every pending level-up in
    /// the same call. `minutes <= 0` leaves the state untouched.
    ///
    /// Settles with `current_xp < xp_to_next_level`.
    pub fn award_minutes(&mut self, minutes: i64) {
        if minutes <= 0 {
            return;
        }
        self.current_xp += minutes * XP_PER_MINUTE;
        while self.current_xp >= self.xp_to_next_level {
            self.current_xp -= self.xp_to_next_level;
            self.level += 1;
            self.xp_to_next_level = next_requirement(self.xp_to_next_level);
        }
    }
}
