use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::settings::Paths;

pub(crate) fn run_stats(paths: &Paths) -> Result<(), CliError> {
    if !paths.database.exists() {
        log::warn!("No emote database found at {}", paths.database.display());
        log::info!("Run 'emote-db ingest' to create one.");
        return Ok(());
    }

    let conn = super::open_store(&paths.database)?;
    let stats = emote_db::store_stats(&conn)
        .map_err(|e| CliError::database(format!("Failed to query store stats: {}", e)))?;

    log::info!(
        "{}",
        "Emote Database Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", paths.database.display());
    crate::log_blank();
    log::info!("  Emotes:         {:>8}", stats.emotes);
    log::info!("  Folders:        {:>8}", stats.folders);
    log::info!("  Packages:       {:>8}", stats.packages);
    log::info!("  Ingest runs:    {:>8}", stats.import_runs);

    let runs = emote_db::list_import_logs(&conn, 5)
        .map_err(|e| CliError::database(format!("Failed to list ingest runs: {}", e)))?;
    if !runs.is_empty() {
        crate::log_blank();
        log::info!("{}", "Recent runs".if_supports_color(Stdout, |t| t.bold()));
        for run in runs {
            log::info!(
                "  {}  accepted {:>6}  no name {:>4}  no danmaku {:>4}  dup {:>4}  dropped {:>4}",
                run.imported_at,
                run.records_accepted,
                run.missing_emote_name,
                run.missing_danmaku_name,
                run.duplicate_danmaku_name,
                run.dropped,
            );
        }
    }

    Ok(())
}
