use emote_import::{JsonStyle, export_csv, export_json};

use crate::CliError;
use crate::cli_types::ExportFormat;
use crate::settings::Paths;

/// Write the requested snapshots of the store.
pub(crate) fn run_export(paths: &Paths, formats: &[ExportFormat]) -> Result<(), CliError> {
    let conn = super::open_store(&paths.database)?;

    for format in formats {
        let (path, written) = match format {
            ExportFormat::Csv => (&paths.csv, export_csv(&conn, &paths.csv)),
            ExportFormat::Json => (
                &paths.json,
                export_json(&conn, &paths.json, JsonStyle::Pretty),
            ),
            ExportFormat::JsonMin => (
                &paths.json_min,
                export_json(&conn, &paths.json_min, JsonStyle::Compact),
            ),
        };
        let count = written.map_err(|e| CliError::export(e.to_string()))?;
        log::info!("Wrote {} emotes to {}", count, path.display());
    }

    Ok(())
}
