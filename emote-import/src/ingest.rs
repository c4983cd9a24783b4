//! Ingest every package folder into the emote store.
//!
//! The store is cleared first, then each folder's manifest is read and
//! every entry normalized. Valid entries of one package are committed in a
//! single immediate transaction; a duplicate chat token inside that batch
//! goes to the rejection buckets instead of failing the transaction.

use std::path::Path;

use emote_catalog::manifest::{self, ManifestError};
use emote_catalog::normalize::{Outcome, normalize_entry};
use emote_catalog::report::{RejectionReport, ReportError};
use emote_catalog::types::*;
use emote_db::operations::{self, InsertOutcome, OperationError};
use rusqlite::{Connection, Transaction, TransactionBehavior};
use thiserror::Error;

use crate::progress::ImportProgress;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Rejection report error: {0}")]
    Report(#[from] ReportError),
}

/// Counts from a single ingestion run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IngestStats {
    /// Folders with a manifest.
    pub folders_scanned: u64,
    /// Folders without a manifest.
    pub folders_skipped: u64,
    pub packages: u64,
    pub accepted: u64,
    pub missing_emote_name: u64,
    pub missing_danmaku_name: u64,
    pub duplicate_danmaku_name: u64,
    /// Entries whose url is not an image. Never bucketed.
    pub dropped: u64,
}

impl IngestStats {
    fn count_rejection(&mut self, reason: RejectReason) {
        match reason {
            RejectReason::MissingEmoteName => self.missing_emote_name += 1,
            RejectReason::MissingDanmakuName => self.missing_danmaku_name += 1,
            RejectReason::DuplicateDanmakuName => self.duplicate_danmaku_name += 1,
        }
    }

    pub fn rejected(&self) -> u64 {
        self.missing_emote_name + self.missing_danmaku_name + self.duplicate_danmaku_name
    }
}

/// Outcome of a completed run.
#[derive(Debug)]
pub struct IngestResult {
    pub stats: IngestStats,
    pub rejections: RejectionBuckets,
}

/// Rebuild the store from the package folders under `packages_dir`.
///
/// The rejection report is written to `report_path` once every folder has
/// been processed, and the run is recorded in `import_log`. A malformed
/// manifest aborts the run; packages committed before it stay in the store.
pub fn ingest_packages(
    conn: &Connection,
    packages_dir: &Path,
    report_path: &Path,
    progress: Option<&dyn ImportProgress>,
) -> Result<IngestResult, IngestError> {
    let folders = manifest::list_package_folders(packages_dir)?;
    let mut stats = IngestStats::default();
    let mut rejections = RejectionBuckets::default();

    if let Some(p) = progress {
        p.on_phase("Clearing emote store");
    }
    let cleared = operations::clear_emotes(conn)?;
    log::debug!("Removed {} emotes from previous run", cleared);

    if let Some(p) = progress {
        p.on_phase(&format!(
            "Importing {} package folder(s) from {}",
            folders.len(),
            packages_dir.display()
        ));
    }

    for (i, folder) in folders.iter().enumerate() {
        let Some(manifest) = manifest::read_manifest(packages_dir, folder)? else {
            log::debug!("No manifest in {}, skipping", folder);
            stats.folders_skipped += 1;
            if let Some(p) = progress {
                p.on_folder(i + 1, folders.len(), folder);
            }
            continue;
        };
        stats.folders_scanned += 1;

        for package in &manifest.packages {
            stats.packages += 1;
            let batch = route_entries(folder, package, &mut stats, &mut rejections);
            commit_batch(conn, batch, &mut stats, &mut rejections)?;
        }

        if let Some(p) = progress {
            p.on_folder(i + 1, folders.len(), folder);
        }
    }

    RejectionReport::from_buckets(&rejections).write_to(report_path)?;
    record_run(conn, packages_dir, &stats)?;

    if let Some(p) = progress {
        p.on_complete(&format!(
            "Imported {} emotes ({} missing emote name, {} missing danmaku name, {} duplicate)",
            stats.accepted,
            stats.missing_emote_name,
            stats.missing_danmaku_name,
            stats.duplicate_danmaku_name,
        ));
    }

    Ok(IngestResult { stats, rejections })
}

/// Normalize one package's entries. Returns the insert candidates in order.
fn route_entries(
    folder: &str,
    package: &Package,
    stats: &mut IngestStats,
    rejections: &mut RejectionBuckets,
) -> Vec<EmoteRecord> {
    let mut batch = Vec::new();
    for entry in &package.entries {
        match normalize_entry(folder, &package.package_name, entry) {
            Outcome::Dropped => {
                log::debug!("Dropping non-image entry in {}: {}", folder, entry.asset_url);
                stats.dropped += 1;
            }
            Outcome::Rejected(reason, record) => {
                log::debug!("Rejected {:?} in {}: {}", record.danmaku_name, folder, reason);
                stats.count_rejection(reason);
                rejections.push(reason, record);
            }
            Outcome::Candidate(record) => batch.push(record),
        }
    }
    batch
}

/// Insert one package's candidates inside a single immediate transaction.
fn commit_batch(
    conn: &Connection,
    batch: Vec<EmoteRecord>,
    stats: &mut IngestStats,
    rejections: &mut RejectionBuckets,
) -> Result<(), IngestError> {
    if batch.is_empty() {
        return Ok(());
    }

    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
    let mut accepted = 0;
    let mut duplicates = Vec::new();

    for record in batch {
        match operations::try_insert_emote(&tx, &record)? {
            InsertOutcome::Inserted(_) => accepted += 1,
            InsertOutcome::Duplicate => {
                log::debug!(
                    "Duplicate danmaku name {} in {}",
                    record.danmaku_name,
                    record.folder_name
                );
                duplicates.push(record);
            }
        }
    }

    tx.commit()?;

    stats.accepted += accepted;
    for record in duplicates {
        stats.count_rejection(RejectReason::DuplicateDanmakuName);
        rejections.push(RejectReason::DuplicateDanmakuName, record);
    }
    Ok(())
}

fn record_run(conn: &Connection, packages_dir: &Path, stats: &IngestStats) -> Result<(), IngestError> {
    let log = ImportLog {
        id: 0,
        source_name: packages_dir.display().to_string(),
        imported_at: chrono::Utc::now().to_rfc3339(),
        records_accepted: stats.accepted as i64,
        missing_emote_name: stats.missing_emote_name as i64,
        missing_danmaku_name: stats.missing_danmaku_name as i64,
        duplicate_danmaku_name: stats.duplicate_danmaku_name as i64,
        dropped: stats.dropped as i64,
    };
    operations::insert_import_log(conn, &log)?;
    Ok(())
}
