//! Data model types for the emote catalog.
//!
//! Two layers live here: the serde wire types that mirror a package
//! manifest file byte-for-byte, and the domain types the rest of the
//! workspace works with (packages, raw entries, canonical records).

use serde::{Deserialize, Serialize};

// ── Manifest wire format ────────────────────────────────────────────────────

/// Top-level shape of a `<folder>/<folder>.json` manifest file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestFile {
    pub data: ManifestData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestData {
    #[serde(default)]
    pub packages: Vec<ManifestPackage>,
}

/// One emote package as it appears in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestPackage {
    /// Display name of the package.
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub emote: Vec<ManifestEmote>,
}

/// One emote entry as it appears in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEmote {
    /// Chat-command token, e.g. `[tv_smile]`.
    #[serde(default)]
    pub text: Option<String>,
    /// Remote image reference.
    pub url: String,
    #[serde(default)]
    pub meta: EmoteMeta,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmoteMeta {
    #[serde(default)]
    pub alias: Option<String>,
}

// ── Domain tree ─────────────────────────────────────────────────────────────

/// A parsed manifest: the packages of one package folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub packages: Vec<Package>,
}

/// A named group of emotes within a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub package_name: String,
    pub entries: Vec<RawEmoteEntry>,
}

/// A single emote entry before validation. Absent strings are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEmoteEntry {
    pub alias: String,
    pub danmaku_text: String,
    pub asset_url: String,
}

impl From<ManifestFile> for Manifest {
    fn from(file: ManifestFile) -> Self {
        let packages = file
            .data
            .packages
            .into_iter()
            .map(|pkg| Package {
                package_name: pkg.text.unwrap_or_default(),
                entries: pkg
                    .emote
                    .into_iter()
                    .map(|e| RawEmoteEntry {
                        alias: e.meta.alias.unwrap_or_default(),
                        danmaku_text: e.text.unwrap_or_default(),
                        asset_url: e.url,
                    })
                    .collect(),
            })
            .collect();
        Manifest { packages }
    }
}

// ── Records ─────────────────────────────────────────────────────────────────

/// A normalized emote record without a store id.
///
/// Used both for insert candidates and for entries held in the rejection
/// buckets; rejected entries may carry empty name fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmoteRecord {
    pub folder_name: String,
    #[serde(default)]
    pub og_file_name: Option<String>,
    pub package_name: String,
    #[serde(default)]
    pub emote_name: String,
    #[serde(default)]
    pub danmaku_name: String,
}

/// A persisted emote row. Field order is the export column order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoredEmote {
    pub id: i64,
    pub folder_name: String,
    pub og_file_name: Option<String>,
    pub package_name: String,
    pub emote_name: String,
    pub danmaku_name: String,
}

// ── Rejections ──────────────────────────────────────────────────────────────

/// Why an entry was not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    MissingEmoteName,
    MissingDanmakuName,
    DuplicateDanmakuName,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::MissingEmoteName => "missing_emote_name",
            RejectReason::MissingDanmakuName => "missing_danmaku_name",
            RejectReason::DuplicateDanmakuName => "duplicate_danmaku_name",
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entries that failed validation, grouped by reason in encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RejectionBuckets {
    pub missing_emote_name: Vec<EmoteRecord>,
    pub missing_danmaku_name: Vec<EmoteRecord>,
    pub duplicate_danmaku_name: Vec<EmoteRecord>,
}

impl RejectionBuckets {
    pub fn push(&mut self, reason: RejectReason, record: EmoteRecord) {
        match reason {
            RejectReason::MissingEmoteName => self.missing_emote_name.push(record),
            RejectReason::MissingDanmakuName => self.missing_danmaku_name.push(record),
            RejectReason::DuplicateDanmakuName => self.duplicate_danmaku_name.push(record),
        }
    }

    pub fn total(&self) -> usize {
        self.missing_emote_name.len()
            + self.missing_danmaku_name.len()
            + self.duplicate_danmaku_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

// ── Import tracking ─────────────────────────────────────────────────────────

/// One completed ingestion run.
#[derive(Debug, Clone)]
pub struct ImportLog {
    pub id: i64,
    pub source_name: String,
    pub imported_at: String,
    pub records_accepted: i64,
    pub missing_emote_name: i64,
    pub missing_danmaku_name: i64,
    pub duplicate_danmaku_name: i64,
    pub dropped: i64,
}
