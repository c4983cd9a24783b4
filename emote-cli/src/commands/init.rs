use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::settings::Paths;

/// Create the emote store and its tables if missing.
pub(crate) fn run_init(paths: &Paths) -> Result<(), CliError> {
    let conn = super::open_store(&paths.database)?;
    emote_db::schema::create_schema(&conn)
        .map_err(|e| CliError::database(format!("Failed to create schema: {}", e)))?;

    log::info!(
        "{} {}",
        "Initialized emote database:".if_supports_color(Stdout, |t| t.bold()),
        paths.database.display(),
    );
    Ok(())
}
