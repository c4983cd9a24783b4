pub(crate) mod config;
pub(crate) mod export;
pub(crate) mod ingest;
pub(crate) mod init;
pub(crate) mod relocate;
pub(crate) mod repair;
pub(crate) mod run;
pub(crate) mod stats;

use std::path::Path;

use rusqlite::Connection;

use crate::CliError;

/// Open (creating if needed) the emote store.
pub(crate) fn open_store(db_path: &Path) -> Result<Connection, CliError> {
    emote_db::open_database(db_path).map_err(|e| {
        CliError::database(format!(
            "Failed to open emote database at {}: {}",
            db_path.display(),
            e
        ))
    })
}
