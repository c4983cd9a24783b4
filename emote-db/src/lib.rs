//! SQLite persistence layer for the emote store.
//!
//! Provides schema creation, the deduplicating insert, and read queries
//! backed by SQLite (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{
    InsertOutcome, OperationError, clear_emotes, insert_import_log, try_insert_emote,
};
pub use queries::{
    StoreStats, all_emotes, emote_count, find_emote_by_danmaku, list_import_logs, store_stats,
};
pub use schema::{SchemaError, open_database, open_memory};
