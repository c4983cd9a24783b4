use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use emote_import::{LogProgress, ingest_packages};

use crate::CliError;
use crate::settings::Paths;

/// Clear the store and import every package manifest.
pub(crate) fn run_ingest(paths: &Paths) -> Result<(), CliError> {
    let conn = super::open_store(&paths.database)?;

    log::info!(
        "{}",
        format!(
            "Ingesting {} into {}",
            paths.packages.display(),
            paths.database.display()
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );

    let result = ingest_packages(&conn, &paths.packages, &paths.report, Some(&LogProgress))
        .map_err(|e| CliError::ingest(e.to_string()))?;
    let stats = &result.stats;

    crate::log_blank();
    log::info!("  Folders:                {:>8}", stats.folders_scanned);
    log::info!("  Folders w/o manifest:   {:>8}", stats.folders_skipped);
    log::info!("  Packages:               {:>8}", stats.packages);
    log::info!(
        "  Accepted:               {:>8}",
        stats.accepted.if_supports_color(Stdout, |t| t.green()),
    );
    log::info!("  Missing emote name:     {:>8}", stats.missing_emote_name);
    log::info!("  Missing danmaku name:   {:>8}", stats.missing_danmaku_name);
    log::info!("  Duplicate danmaku name: {:>8}", stats.duplicate_danmaku_name);
    if stats.dropped > 0 {
        log::info!(
            "  Non-image (dropped):    {:>8}",
            stats.dropped.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    if stats.rejected() > 0 {
        crate::log_blank();
        log::info!("Rejected entries written to {}", paths.report.display());
    }

    Ok(())
}
