//! Ingest emote package manifests into the store and derive artifacts from it.
//!
//! This crate owns the pipeline logic: walking package folders, routing
//! normalized entries into the dedup store or the rejection buckets,
//! exporting the store, relocating image assets under their chat-token
//! names, and the offline repair of manifests with missing aliases.

pub mod export;
pub mod ingest;
pub mod progress;
pub mod relocate;
pub mod repair;

pub use export::{ExportError, JsonStyle, export_csv, export_json, render_csv, render_json};
pub use ingest::{IngestError, IngestResult, IngestStats, ingest_packages};
pub use progress::{ImportProgress, LogProgress, SilentProgress};
pub use relocate::{RelocateError, RelocateMode, RelocateStats, relocate_assets, relocate_emotes};
pub use repair::{
    RepairAction, RepairError, RepairPlan, RepairSummary, derive_emote_name, execute_repairs,
    patch_manifest_aliases, plan_repairs,
};
