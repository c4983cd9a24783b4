//! Recover missing emote aliases from the rejection report.
//!
//! For entries rejected with no alias, a name is guessed from the chat
//! token (`[tv_smile]` → `smile`). Every manifest entry whose url mentions
//! the original image file gets the guessed alias, then the image is
//! renamed to `<name>.png` inside its package folder. If the rename fails
//! the manifest is restored, so an image and its alias never disagree.
//! Running this again after a successful repair touches nothing: the
//! target image already exists and each entry is reported as an error.

use std::path::{Path, PathBuf};

use emote_catalog::manifest::manifest_path;
use emote_catalog::report::RejectionReport;
use emote_catalog::types::EmoteRecord;
use serde_json::Value;
use thiserror::Error;

use crate::relocate::IMAGE_EXTENSION;

#[derive(Debug, Error)]
pub enum RepairError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("Unexpected manifest layout in {0}")]
    Layout(String),
}

/// Guess an alias from a chat token.
///
/// Strips the first `_]`, then the first `]` and `[`, and keeps the last
/// `_`-delimited segment. Returns `None` when nothing usable is left.
pub fn derive_emote_name(danmaku_name: &str) -> Option<String> {
    let stripped = danmaku_name
        .replacen("_]", "", 1)
        .replacen(']', "", 1)
        .replacen('[', "", 1);
    let name = stripped.rsplit('_').next().unwrap_or_default();
    if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        None
    } else {
        Some(name.to_string())
    }
}

/// One planned repair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairAction {
    pub folder_name: String,
    pub og_file_name: String,
    pub danmaku_name: String,
    pub new_name: String,
    pub source: PathBuf,
    pub target: PathBuf,
    pub manifest: PathBuf,
}

#[derive(Debug, Default)]
pub struct RepairPlan {
    pub actions: Vec<RepairAction>,
    /// Entries the heuristic could not name, for manual review.
    pub skipped: Vec<EmoteRecord>,
}

#[derive(Debug, Default)]
pub struct RepairSummary {
    pub images_renamed: usize,
    pub entries_patched: usize,
    pub errors: Vec<String>,
}

/// Plan repairs for the `emote_name` entries of `report` that carry an image file name.
pub fn plan_repairs(report: &RejectionReport, packages_dir: &Path) -> RepairPlan {
    let mut plan = RepairPlan::default();

    for record in &report.emote_name {
        let Some(og_file_name) = record.og_file_name.as_deref().filter(|s| !s.is_empty()) else {
            continue;
        };
        let Some(new_name) = derive_emote_name(&record.danmaku_name) else {
            log::debug!("No name derivable from {:?}", record.danmaku_name);
            plan.skipped.push(record.clone());
            continue;
        };

        let folder = packages_dir.join(&record.folder_name);
        plan.actions.push(RepairAction {
            folder_name: record.folder_name.clone(),
            og_file_name: og_file_name.to_string(),
            danmaku_name: record.danmaku_name.clone(),
            source: folder.join(og_file_name),
            target: folder.join(format!("{new_name}.{IMAGE_EXTENSION}")),
            manifest: manifest_path(packages_dir, &record.folder_name),
            new_name,
        });
    }

    plan
}

/// Execute a repair plan. Failures are collected and do not stop later actions.
pub fn execute_repairs(plan: &RepairPlan) -> RepairSummary {
    let mut summary = RepairSummary::default();

    for action in &plan.actions {
        if action.target.exists() && action.source != action.target {
            summary.errors.push(format!(
                "Target already exists: {}",
                action.target.display()
            ));
            continue;
        }
        if !action.source.is_file() {
            summary.errors.push(format!(
                "Source image not found: {}",
                action.source.display()
            ));
            continue;
        }

        let original = match std::fs::read_to_string(&action.manifest) {
            Ok(contents) => contents,
            Err(e) => {
                summary.errors.push(format!(
                    "Failed to read {}: {}",
                    action.manifest.display(),
                    e
                ));
                continue;
            }
        };

        let patched =
            match patch_manifest_aliases(&action.manifest, &action.og_file_name, &action.new_name) {
                Ok(0) => {
                    summary.errors.push(format!(
                        "No entry in {} references {}",
                        action.manifest.display(),
                        action.og_file_name,
                    ));
                    continue;
                }
                Ok(n) => n,
                Err(e) => {
                    summary.errors.push(e.to_string());
                    continue;
                }
            };

        if let Err(e) = std::fs::rename(&action.source, &action.target) {
            summary.errors.push(format!(
                "Failed to rename {} -> {}: {}",
                action.source.display(),
                action.target.display(),
                e,
            ));
            if let Err(e) = std::fs::write(&action.manifest, &original) {
                summary.errors.push(format!(
                    "Failed to restore {}: {}",
                    action.manifest.display(),
                    e
                ));
            }
            continue;
        }

        summary.images_renamed += 1;
        summary.entries_patched += patched;
    }

    summary
}

/// Set `meta.alias` to `alias` on every manifest entry whose url contains
/// `og_file_name`, then rewrite the manifest. Returns the number of entries changed.
///
/// The manifest is edited as an untyped tree so fields this tool does not
/// model are written back untouched.
pub fn patch_manifest_aliases(
    manifest: &Path,
    og_file_name: &str,
    alias: &str,
) -> Result<usize, RepairError> {
    let path = manifest.display().to_string();
    let contents = std::fs::read_to_string(manifest).map_err(|e| RepairError::Io {
        path: path.clone(),
        source: e,
    })?;
    let mut doc: Value = serde_json::from_str(&contents).map_err(|e| RepairError::Json {
        path: path.clone(),
        source: e,
    })?;

    let packages = doc
        .pointer_mut("/data/packages")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| RepairError::Layout(path.clone()))?;

    let mut patched = 0;
    for package in packages.iter_mut() {
        let Some(emotes) = package.get_mut("emote").and_then(Value::as_array_mut) else {
            continue;
        };
        for emote in emotes.iter_mut() {
            let matches = emote
                .get("url")
                .and_then(Value::as_str)
                .is_some_and(|url| url.contains(og_file_name));
            if !matches {
                continue;
            }
            let Some(obj) = emote.as_object_mut() else {
                continue;
            };
            let meta = obj
                .entry("meta")
                .or_insert_with(|| Value::Object(Default::default()));
            if !meta.is_object() {
                *meta = Value::Object(Default::default());
            }
            if let Some(meta) = meta.as_object_mut() {
                meta.insert("alias".to_string(), Value::String(alias.to_string()));
                patched += 1;
            }
        }
    }

    if patched > 0 {
        let json = serde_json::to_string_pretty(&doc).map_err(|e| RepairError::Json {
            path: path.clone(),
            source: e,
        })?;
        std::fs::write(manifest, json).map_err(|e| RepairError::Io { path, source: e })?;
    }

    Ok(patched)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_from_bracketed_token() {
        assert_eq!(derive_emote_name("[tv_smile]").as_deref(), Some("smile"));
        assert_eq!(derive_emote_name("[2233_wave]").as_deref(), Some("wave"));
        assert_eq!(derive_emote_name("[plain]").as_deref(), Some("plain"));
    }

    #[test]
    fn derive_strips_trailing_underscore_bracket() {
        assert_eq!(derive_emote_name("[tv_doge_]").as_deref(), Some("doge"));
    }

    #[test]
    fn derive_replaces_first_occurrence_only() {
        // Only the first `]` is stripped.
        assert_eq!(derive_emote_name("[a_b]]").as_deref(), Some("b]"));
    }

    #[test]
    fn derive_miss_is_none() {
        assert_eq!(derive_emote_name(""), None);
        assert_eq!(derive_emote_name("[]"), None);
        assert_eq!(derive_emote_name("[_]"), None);
        assert_eq!(derive_emote_name("[tv__]"), None);
    }
}
