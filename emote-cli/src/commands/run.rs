use crate::CliError;
use crate::cli_types::{ExportFormat, RunArgs};
use crate::settings::Paths;

use emote_import::RelocateMode;

/// Execute the selected pipeline steps in order, stopping at the first failure.
pub(crate) fn run_pipeline(paths: &Paths, args: &RunArgs) -> Result<(), CliError> {
    let formats: Vec<ExportFormat> = [
        (args.csv, ExportFormat::Csv),
        (args.json, ExportFormat::Json),
        (args.json_min, ExportFormat::JsonMin),
    ]
    .into_iter()
    .filter_map(|(on, format)| on.then_some(format))
    .collect();

    if !(args.init || args.ingest || args.img || !formats.is_empty()) {
        log::warn!("No steps selected. See 'emote-db run --help'.");
        return Ok(());
    }

    if args.init {
        super::init::run_init(paths)?;
    }
    if args.ingest {
        super::ingest::run_ingest(paths)?;
    }
    if !formats.is_empty() {
        super::export::run_export(paths, &formats)?;
    }
    if args.img {
        let mode = if args.move_files {
            RelocateMode::Move
        } else {
            RelocateMode::Copy
        };
        super::relocate::run_relocate(paths, &paths.emotes, mode)?;
    }

    Ok(())
}
