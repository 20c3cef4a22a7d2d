// crates/db/src/queries/mod.rs
// Keyed-lookup and upsert operations over the focusgrove stores. These are
// pass-through persistence only; derived-state computation lives in the
// stats and progression modules.

mod sessions;
mod stats;
mod users;
