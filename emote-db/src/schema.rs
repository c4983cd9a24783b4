//! SQLite schema creation and migration.

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Migration error: expected version {expected}, found {found}")]
    VersionMismatch { expected: i32, found: i32 },
}

/// Current schema version. Increment when adding migrations.
pub const CURRENT_VERSION: i32 = 1;

/// Create all tables and indexes if they don't exist.
///
/// Idempotent: an existing store keeps its rows and version history.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    if get_schema_version(conn)? < CURRENT_VERSION {
        set_schema_version(conn, CURRENT_VERSION)?;
    }
    Ok(())
}

/// Open or create an emote database at the given path.
pub fn open_database(path: &std::path::Path) -> Result<Connection, SchemaError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    let version = get_schema_version(&conn)?;
    if version == 0 {
        create_schema(&conn)?;
    } else if version != CURRENT_VERSION {
        migrate(&conn, version)?;
    }

    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Get the current schema version, or 0 if no schema exists.
fn get_schema_version(conn: &Connection) -> Result<i32, SchemaError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !exists {
        return Ok(0);
    }

    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

fn set_schema_version(conn: &Connection, version: i32) -> Result<(), SchemaError> {
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Bring an older store up to `CURRENT_VERSION`.
///
/// There are no migrations yet; a store written by a newer binary is refused.
fn migrate(conn: &Connection, from_version: i32) -> Result<(), SchemaError> {
    if from_version > CURRENT_VERSION {
        return Err(SchemaError::VersionMismatch {
            expected: CURRENT_VERSION,
            found: from_version,
        });
    }
    create_schema(conn)
}

const SCHEMA_SQL: &str = r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Normalized emotes. Plain INTEGER PRIMARY KEY so ids restart at 1
-- once the table has been cleared.
CREATE TABLE IF NOT EXISTS emotes (
    id INTEGER PRIMARY KEY,
    folder_name TEXT NOT NULL,
    og_file_name TEXT,
    package_name TEXT NOT NULL,
    emote_name TEXT NOT NULL,
    danmaku_name TEXT NOT NULL UNIQUE
);
CREATE INDEX IF NOT EXISTS idx_emotes_folder ON emotes(folder_name);

-- Ingestion run tracking
CREATE TABLE IF NOT EXISTS import_log (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    source_name TEXT NOT NULL,
    imported_at TEXT NOT NULL,
    records_accepted INTEGER NOT NULL DEFAULT 0,
    missing_emote_name INTEGER NOT NULL DEFAULT 0,
    missing_danmaku_name INTEGER NOT NULL DEFAULT 0,
    duplicate_danmaku_name INTEGER NOT NULL DEFAULT 0,
    dropped INTEGER NOT NULL DEFAULT 0
);
"#;
