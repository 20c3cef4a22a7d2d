// crates/core/src/lib.rs
pub mod histogram;
pub mod leveling;
pub mod paths;
pub mod streak;
pub mod types;

pub use leveling::Progression;
pub use types::*;
