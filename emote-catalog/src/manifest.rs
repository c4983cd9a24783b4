//! Loading package manifests from the packages directory.
//!
//! Each package folder holds a manifest named after the folder itself:
//! ```text
//! packages_dir/
//!   tv_emotes/
//!     tv_emotes.json
//!     smile.png
//!     ...
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::{Manifest, ManifestFile};

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("Directory not found: {0}")]
    DirNotFound(String),
}

/// Path of the manifest for `folder`: `<packages_dir>/<folder>/<folder>.json`.
pub fn manifest_path(packages_dir: &Path, folder: &str) -> PathBuf {
    packages_dir.join(folder).join(format!("{folder}.json"))
}

/// Read and parse the manifest of one package folder.
///
/// Returns `Ok(None)` when the folder has no manifest. A manifest that
/// exists but cannot be read or parsed is an error.
pub fn read_manifest(packages_dir: &Path, folder: &str) -> Result<Option<Manifest>, ManifestError> {
    let path = manifest_path(packages_dir, folder);
    if !path.is_file() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ManifestError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let file: ManifestFile = serde_json::from_str(&contents).map_err(|e| ManifestError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(Some(Manifest::from(file)))
}

/// List the package folder names under `packages_dir`, sorted by name.
///
/// Plain files at the top level are ignored.
pub fn list_package_folders(packages_dir: &Path) -> Result<Vec<String>, ManifestError> {
    if !packages_dir.is_dir() {
        return Err(ManifestError::DirNotFound(packages_dir.display().to_string()));
    }

    let io_err = |e| ManifestError::Io {
        path: packages_dir.display().to_string(),
        source: e,
    };

    let mut folders = Vec::new();
    for entry in std::fs::read_dir(packages_dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        // Follows symlinks, so a linked package folder is listed too.
        if entry.path().is_dir() {
            folders.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    folders.sort();

    Ok(folders)
}
