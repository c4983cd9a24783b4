//! The rejection report written after each ingestion run.
//!
//! On disk the report has two arrays:
//! ```json
//! { "emote_name": [ ... ], "danmaku_name": [ ... ] }
//! ```
//! `danmaku_name` holds entries with no chat token followed by duplicates.
//! A missing-token entry always has an empty `danmaku_name` and a duplicate
//! never does, so the three buckets can be recovered from the file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{EmoteRecord, RejectionBuckets};

#[derive(Debug, Error)]
pub enum ReportError {
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
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionReport {
    #[serde(default)]
    pub emote_name: Vec<EmoteRecord>,
    #[serde(default)]
    pub danmaku_name: Vec<EmoteRecord>,
}

impl RejectionReport {
    pub fn from_buckets(buckets: &RejectionBuckets) -> Self {
        let mut danmaku_name = buckets.missing_danmaku_name.clone();
        danmaku_name.extend(buckets.duplicate_danmaku_name.iter().cloned());
        Self {
            emote_name: buckets.missing_emote_name.clone(),
            danmaku_name,
        }
    }

    pub fn into_buckets(self) -> RejectionBuckets {
        let (missing, duplicate): (Vec<_>, Vec<_>) = self
            .danmaku_name
            .into_iter()
            .partition(|r| r.danmaku_name.is_empty());
        RejectionBuckets {
            missing_emote_name: self.emote_name,
            missing_danmaku_name: missing,
            duplicate_danmaku_name: duplicate,
        }
    }

    pub fn read_from(path: &Path) -> Result<Self, ReportError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ReportError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| ReportError::Json {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Write the report as two-space indented JSON, replacing any previous file.
    pub fn write_to(&self, path: &Path) -> Result<(), ReportError> {
        let io_err = |e| ReportError::Io {
            path: path.display().to_string(),
            source: e,
        };
        let json = serde_json::to_string_pretty(self).map_err(|e| ReportError::Json {
            path: path.display().to_string(),
            source: e,
        })?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(io_err)?;
        std::fs::rename(&tmp, path).map_err(io_err)?;
        Ok(())
    }
}
