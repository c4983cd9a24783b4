//! Data model and source-manifest handling for the emote catalog.
//!
//! This crate knows how package manifests look on disk, how a raw emote
//! entry becomes a canonical record (or a classified rejection), and how
//! the rejection report is written for later repair.

pub mod manifest;
pub mod normalize;
pub mod report;
pub mod types;

pub use manifest::{ManifestError, list_package_folders, manifest_path, read_manifest};
pub use normalize::{Outcome, is_image_reference, normalize_entry, og_file_name};
pub use report::{RejectionReport, ReportError};
pub use types::*;
