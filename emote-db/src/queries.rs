//! Read queries for the emote store.

use emote_catalog::types::{ImportLog, StoredEmote};
use rusqlite::{Connection, params};

use crate::operations::OperationError;

// ── Emote Lookups ───────────────────────────────────────────────────────────

/// All stored emotes in insertion (id) order.
pub fn all_emotes(conn: &Connection) -> Result<Vec<StoredEmote>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, folder_name, og_file_name, package_name, emote_name, danmaku_name
         FROM emotes ORDER BY id",
    )?;
    let rows = stmt.query_map([], row_to_emote)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

pub fn emote_count(conn: &Connection) -> Result<i64, OperationError> {
    Ok(conn.query_row("SELECT COUNT(*) FROM emotes", [], |row| row.get(0))?)
}

/// Find the emote stored under a chat token.
pub fn find_emote_by_danmaku(
    conn: &Connection,
    danmaku_name: &str,
) -> Result<Option<StoredEmote>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, folder_name, og_file_name, package_name, emote_name, danmaku_name
         FROM emotes WHERE danmaku_name = ?1",
    )?;
    let result = stmt.query_row(params![danmaku_name], row_to_emote);
    match result {
        Ok(emote) => Ok(Some(emote)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn row_to_emote(row: &rusqlite::Row<'_>) -> rusqlite::Result<StoredEmote> {
    Ok(StoredEmote {
        id: row.get(0)?,
        folder_name: row.get(1)?,
        og_file_name: row.get(2)?,
        package_name: row.get(3)?,
        emote_name: row.get(4)?,
        danmaku_name: row.get(5)?,
    })
}

// ── Import Log ──────────────────────────────────────────────────────────────

/// Most recent ingestion runs first.
pub fn list_import_logs(conn: &Connection, limit: u32) -> Result<Vec<ImportLog>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, source_name, imported_at, records_accepted, missing_emote_name,
                missing_danmaku_name, duplicate_danmaku_name, dropped
         FROM import_log ORDER BY id DESC LIMIT ?1",
    )?;
    let rows = stmt.query_map(params![limit], |row| {
        Ok(ImportLog {
            id: row.get(0)?,
            source_name: row.get(1)?,
            imported_at: row.get(2)?,
            records_accepted: row.get(3)?,
            missing_emote_name: row.get(4)?,
            missing_danmaku_name: row.get(5)?,
            duplicate_danmaku_name: row.get(6)?,
            dropped: row.get(7)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Summary statistics for the store.
#[derive(Debug)]
pub struct StoreStats {
    pub emotes: i64,
    pub folders: i64,
    pub packages: i64,
    pub import_runs: i64,
}

pub fn store_stats(conn: &Connection) -> Result<StoreStats, OperationError> {
    let count = |sql: &str| -> Result<i64, OperationError> {
        Ok(conn.query_row(sql, [], |row| row.get(0))?)
    };

    Ok(StoreStats {
        emotes: count("SELECT COUNT(*) FROM emotes")?,
        folders: count("SELECT COUNT(DISTINCT folder_name) FROM emotes")?,
        packages: count("SELECT COUNT(*) FROM (SELECT DISTINCT folder_name, package_name FROM emotes)")?,
        import_runs: count("SELECT COUNT(*) FROM import_log")?,
    })
}
