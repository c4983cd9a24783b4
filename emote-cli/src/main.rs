//! emote-db CLI
//!
//! Command-line interface for building the emote database from package
//! manifests and deriving exports and relocated images from it.

mod cli_types;
mod commands;
mod error;
mod settings;

use std::io::Write;

use clap::Parser;
use log::{Level, LevelFilter};

use cli_types::{Cli, Commands, ExportFormat};
use emote_import::RelocateMode;
pub(crate) use error::CliError;
use settings::{Paths, load_settings, settings_path};

/// Log an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}

fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).target(env_logger::Target::Stdout);

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                buf.timestamp_millis(),
                record.level(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Error => writeln!(buf, "error: {}", record.args()),
            Level::Warn => writeln!(buf, "warning: {}", record.args()),
            _ => writeln!(buf, "{}", record.args()),
        });
    }

    builder.parse_default_env().init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = load_settings(&settings_path())?;
    let paths = Paths::resolve(&cli.paths, &settings);

    match cli.command {
        Commands::Init => commands::init::run_init(&paths),
        Commands::Ingest => commands::ingest::run_ingest(&paths),
        Commands::Export { format } => {
            let formats = format
                .unwrap_or_else(|| vec![ExportFormat::Csv, ExportFormat::Json, ExportFormat::JsonMin]);
            commands::export::run_export(&paths, &formats)
        }
        Commands::Relocate { move_files, dest } => {
            let mode = if move_files {
                RelocateMode::Move
            } else {
                RelocateMode::Copy
            };
            let dest = dest.unwrap_or_else(|| paths.emotes.clone());
            commands::relocate::run_relocate(&paths, &dest, mode)
        }
        Commands::Repair { dry_run, report } => {
            let report = report.unwrap_or_else(|| paths.report.clone());
            commands::repair::run_repair(&paths, &report, dry_run)
        }
        Commands::Stats => commands::stats::run_stats(&paths),
        Commands::Run(args) => commands::run::run_pipeline(&paths, &args),
        Commands::Config { action } => commands::config::run_config(action, &paths),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn run_flags_parse() {
        let cli = Cli::try_parse_from([
            "emote-db", "run", "--init", "--ingest", "--csv", "--json-min", "--img", "--move",
        ])
        .unwrap();
        match cli.command {
            Commands::Run(args) => {
                assert!(args.init && args.ingest && args.csv && args.json_min && args.img);
                assert!(args.move_files);
                assert!(!args.json);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn move_requires_img() {
        assert!(Cli::try_parse_from(["emote-db", "run", "--move"]).is_err());
    }

    #[test]
    fn export_formats_parse() {
        let cli = Cli::try_parse_from(["emote-db", "--workdir", "/w", "export", "-f", "csv,json-min"])
            .unwrap();
        assert_eq!(cli.paths.workdir.as_deref(), Some(std::path::Path::new("/w")));
        match cli.command {
            Commands::Export { format } => {
                assert_eq!(format, Some(vec![ExportFormat::Csv, ExportFormat::JsonMin]));
            }
            _ => panic!("expected export"),
        }
    }
}
