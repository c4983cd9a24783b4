//! Tabular and JSON snapshots of the emote store.
//!
//! Every export reads the full store in id order. An empty store is an
//! error so a missed ingestion step never produces an empty artifact.

use std::path::Path;

use emote_catalog::types::StoredEmote;
use emote_db::operations::OperationError;
use emote_db::queries;
use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("The emote store is empty; initialize it and ingest packages first")]
    EmptyStore,
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// JSON layout for [`export_json`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonStyle {
    /// Two-space indentation.
    Pretty,
    /// No whitespace between tokens.
    Compact,
}

/// Render emotes as CSV with a header row.
pub fn render_csv(emotes: &[StoredEmote]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for emote in emotes {
        writer.serialize(emote)?;
    }
    writer.into_inner().map_err(|e| ExportError::Csv(e.into_error().into()))
}

/// Render emotes as a JSON array.
pub fn render_json(emotes: &[StoredEmote], style: JsonStyle) -> Result<String, ExportError> {
    let json = match style {
        JsonStyle::Pretty => serde_json::to_string_pretty(emotes)?,
        JsonStyle::Compact => serde_json::to_string(emotes)?,
    };
    Ok(json)
}

/// Write the store to `path` as CSV. Returns the number of rows written.
pub fn export_csv(conn: &Connection, path: &Path) -> Result<usize, ExportError> {
    let emotes = load_for_export(conn)?;
    write_file(path, &render_csv(&emotes)?)?;
    log::debug!("Wrote {} rows to {}", emotes.len(), path.display());
    Ok(emotes.len())
}

/// Write the store to `path` as a JSON array. Returns the number of records.
pub fn export_json(conn: &Connection, path: &Path, style: JsonStyle) -> Result<usize, ExportError> {
    let emotes = load_for_export(conn)?;
    write_file(path, render_json(&emotes, style)?.as_bytes())?;
    log::debug!("Wrote {} records to {}", emotes.len(), path.display());
    Ok(emotes.len())
}

fn load_for_export(conn: &Connection) -> Result<Vec<StoredEmote>, ExportError> {
    let emotes = queries::all_emotes(conn)?;
    if emotes.is_empty() {
        return Err(ExportError::EmptyStore);
    }
    Ok(emotes)
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), ExportError> {
    let io_err = |e| ExportError::Io {
        path: path.display().to_string(),
        source: e,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, contents).map_err(io_err)
}
