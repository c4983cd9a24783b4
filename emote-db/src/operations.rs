//! Write operations on the emote store.
//!
//! The store is append-only within a run: rows are inserted through
//! [`try_insert_emote`] and only ever removed wholesale by [`clear_emotes`].

use emote_catalog::types::{EmoteRecord, ImportLog};
use rusqlite::{Connection, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result of a deduplicating insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Stored under the returned row id.
    Inserted(i64),
    /// Another row already holds this `danmaku_name`.
    Duplicate,
}

// ── Emote Operations ────────────────────────────────────────────────────────

/// Delete every emote row. Returns the number of rows removed.
pub fn clear_emotes(conn: &Connection) -> Result<usize, OperationError> {
    Ok(conn.execute("DELETE FROM emotes", [])?)
}

/// Insert `record` unless its `danmaku_name` is already stored.
///
/// Callers batching several inserts should wrap them in one transaction so
/// the existence check and the insert see the same snapshot. The UNIQUE
/// index is the final arbiter: a constraint hit is also reported as
/// [`InsertOutcome::Duplicate`].
pub fn try_insert_emote(
    conn: &Connection,
    record: &EmoteRecord,
) -> Result<InsertOutcome, OperationError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM emotes WHERE danmaku_name = ?1)",
        params![record.danmaku_name],
        |row| row.get(0),
    )?;
    if exists {
        return Ok(InsertOutcome::Duplicate);
    }

    let result = conn.execute(
        "INSERT INTO emotes (folder_name, og_file_name, package_name, emote_name, danmaku_name)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            record.folder_name,
            record.og_file_name,
            record.package_name,
            record.emote_name,
            record.danmaku_name,
        ],
    );

    match result {
        Ok(_) => Ok(InsertOutcome::Inserted(conn.last_insert_rowid())),
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            Ok(InsertOutcome::Duplicate)
        }
        Err(e) => Err(e.into()),
    }
}

// ── Import Log Operations ───────────────────────────────────────────────────

/// Record a finished ingestion run. The `id` field of `log` is ignored.
pub fn insert_import_log(conn: &Connection, log: &ImportLog) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO import_log (source_name, imported_at, records_accepted,
             missing_emote_name, missing_danmaku_name, duplicate_danmaku_name, dropped)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            log.source_name,
            log.imported_at,
            log.records_accepted,
            log.missing_emote_name,
            log.missing_danmaku_name,
            log.duplicate_danmaku_name,
            log.dropped,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}
