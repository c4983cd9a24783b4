//! Copy or move emote images into a flat directory keyed by chat token.
//!
//! Source images live at `<packages_dir>/<folder_name>/<emote_name>.png`
//! and land at `<dest_dir>/<danmaku_name>.png`. The destination directory
//! is emptied before the first file is written. A missing source image
//! stops the run at that record; files relocated before it stay in place.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use emote_catalog::types::StoredEmote;
use emote_db::operations::OperationError;
use emote_db::queries;
use rusqlite::Connection;
use thiserror::Error;

use crate::progress::ImportProgress;

/// Extension of every emote image on disk.
pub const IMAGE_EXTENSION: &str = "png";

#[derive(Debug, Error)]
pub enum RelocateError {
    #[error("The emote store is empty; initialize it and ingest packages first")]
    EmptyStore,
    #[error("Source image not found for {danmaku_name}: {}", .path.display())]
    MissingSource { path: PathBuf, danmaku_name: String },
    #[error("Danmaku name {0:?} is not a usable file name")]
    UnsafeName(String),
    #[error("Destination {} overlaps the packages directory", .0.display())]
    DestinationOverlapsSource(PathBuf),
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
    #[error("I/O error on {path}: {source}")]
    Io { path: String, source: io::Error },
}

/// Whether relocated sources are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelocateMode {
    Copy,
    Move,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RelocateStats {
    pub relocated: usize,
}

/// Source path of an emote image inside its package folder.
pub fn source_path(packages_dir: &Path, emote: &StoredEmote) -> PathBuf {
    packages_dir
        .join(&emote.folder_name)
        .join(format!("{}.{}", emote.emote_name, IMAGE_EXTENSION))
}

/// Destination path for a chat token.
pub fn destination_path(dest_dir: &Path, danmaku_name: &str) -> PathBuf {
    dest_dir.join(format!("{}.{}", danmaku_name, IMAGE_EXTENSION))
}

/// Relocate the image of every stored emote into `dest_dir`.
pub fn relocate_assets(
    conn: &Connection,
    packages_dir: &Path,
    dest_dir: &Path,
    mode: RelocateMode,
    progress: Option<&dyn ImportProgress>,
) -> Result<RelocateStats, RelocateError> {
    let emotes = queries::all_emotes(conn)?;
    relocate_emotes(&emotes, packages_dir, dest_dir, mode, progress)
}

/// Relocate the images of `emotes`, in order, into a freshly emptied `dest_dir`.
pub fn relocate_emotes(
    emotes: &[StoredEmote],
    packages_dir: &Path,
    dest_dir: &Path,
    mode: RelocateMode,
    progress: Option<&dyn ImportProgress>,
) -> Result<RelocateStats, RelocateError> {
    if emotes.is_empty() {
        return Err(RelocateError::EmptyStore);
    }
    check_overlap(packages_dir, dest_dir)?;
    reset_dir(dest_dir)?;

    let mut stats = RelocateStats::default();
    for (i, emote) in emotes.iter().enumerate() {
        if !is_safe_file_stem(&emote.danmaku_name) {
            return Err(RelocateError::UnsafeName(emote.danmaku_name.clone()));
        }

        let source = source_path(packages_dir, emote);
        if !source.is_file() {
            return Err(RelocateError::MissingSource {
                path: source,
                danmaku_name: emote.danmaku_name.clone(),
            });
        }
        let target = destination_path(dest_dir, &emote.danmaku_name);

        let result = match mode {
            RelocateMode::Copy => fs::copy(&source, &target).map(|_| ()),
            RelocateMode::Move => move_file(&source, &target),
        };
        result.map_err(|e| RelocateError::Io {
            path: source.display().to_string(),
            source: e,
        })?;

        log::debug!("{} => {}", source.display(), target.display());
        stats.relocated += 1;
        if let Some(p) = progress {
            p.on_asset(i + 1, emotes.len(), &emote.danmaku_name);
        }
    }

    Ok(stats)
}

fn is_safe_file_stem(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.contains('\0')
}

/// Refuse a destination that is, contains, or lies inside the packages directory.
fn check_overlap(packages_dir: &Path, dest_dir: &Path) -> Result<(), RelocateError> {
    let Ok(packages) = packages_dir.canonicalize() else {
        return Ok(());
    };
    let dest = canonicalize_existing_prefix(dest_dir);
    if packages.starts_with(&dest) || dest.starts_with(&packages) {
        return Err(RelocateError::DestinationOverlapsSource(dest_dir.to_path_buf()));
    }
    Ok(())
}

/// Canonicalize the longest existing ancestor of `path` and re-append the rest.
fn canonicalize_existing_prefix(path: &Path) -> PathBuf {
    let mut existing = path;
    let mut rest = Vec::new();
    loop {
        let probe = if existing.as_os_str().is_empty() {
            Path::new(".")
        } else {
            existing
        };
        if let Ok(canonical) = probe.canonicalize() {
            return rest.iter().rev().fold(canonical, |acc, part| acc.join(part));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                rest.push(name.to_os_string());
                existing = parent;
            }
            _ => return path.to_path_buf(),
        }
    }
}

fn reset_dir(dir: &Path) -> Result<(), RelocateError> {
    let io_err = |e| RelocateError::Io {
        path: dir.display().to_string(),
        source: e,
    };
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(io_err)?;
    }
    fs::create_dir_all(dir).map_err(io_err)
}

/// Rename, falling back to copy-and-delete across filesystems.
fn move_file(source: &Path, target: &Path) -> io::Result<()> {
    match fs::rename(source, target) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            fs::copy(source, target)?;
            fs::remove_file(source)
        }
        Err(e) => Err(e),
    }
}
