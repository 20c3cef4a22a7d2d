// crates/core/src/paths.rs
//! Centralized path functions for app storage locations.

use std::path::PathBuf;

/// App data root: `~/.local/share/focusgrove/` (Linux) or the platform
/// equivalent.
pub fn app_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("focusgrove"))
}

/// SQLite database file: `<app_data_dir>/focusgrove.db`.
pub fn db_path() -> Option<PathBuf> {
    app_data_dir().map(|d| d.join("focusgrove.db"))
}
