use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use emote_catalog::RejectionReport;
use emote_import::{execute_repairs, plan_repairs};

use crate::CliError;
use crate::settings::Paths;

/// Name emotes rejected for a missing alias, using their danmaku names.
pub(crate) fn run_repair(paths: &Paths, report_path: &Path, dry_run: bool) -> Result<(), CliError> {
    let report = RejectionReport::read_from(report_path)
        .map_err(|e| CliError::repair(format!("{} (run 'emote-db ingest' first)", e)))?;

    log::warn!(
        "{}",
        "Repair guesses names from danmaku names; review the results before re-ingesting."
            .if_supports_color(Stdout, |t| t.yellow()),
    );
    if dry_run {
        log::info!(
            "{}",
            "Dry run: no files will be modified".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let plan = plan_repairs(&report, &paths.packages);

    for action in &plan.actions {
        log::info!(
            "  {} {} -> {}.png",
            action.danmaku_name.if_supports_color(Stdout, |t| t.cyan()),
            action.source.display(),
            action.new_name,
        );
    }
    for record in &plan.skipped {
        log::warn!(
            "  No name derivable from {:?} ({}/{}), needs manual review",
            record.danmaku_name,
            record.folder_name,
            record.og_file_name.as_deref().unwrap_or_default(),
        );
    }

    if plan.actions.is_empty() {
        log::info!("Nothing to repair.");
        return Ok(());
    }
    if dry_run {
        crate::log_blank();
        log::info!("{} repair(s) planned", plan.actions.len());
        return Ok(());
    }

    let summary = execute_repairs(&plan);
    for err in &summary.errors {
        log::warn!(
            "  {} {}",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            err,
        );
    }

    crate::log_blank();
    log::info!(
        "Renamed {} image(s), patched {} manifest entr{}",
        summary.images_renamed,
        summary.entries_patched,
        if summary.entries_patched == 1 { "y" } else { "ies" },
    );
    if summary.images_renamed > 0 {
        log::info!("Run 'emote-db ingest' to pick up the repaired entries.");
    }

    Ok(())
}
