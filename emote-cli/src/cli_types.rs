//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "emote-db")]
#[command(about = "Build a deduplicated emote database from package manifests", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub paths: PathArgs,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Location overrides shared by every command.
#[derive(Args, Clone, Default)]
pub(crate) struct PathArgs {
    /// Working directory for the database and all artifacts (default: ./temp)
    #[arg(short, long, global = true)]
    pub workdir: Option<PathBuf>,

    /// SQLite database file (default: <workdir>/emote.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Directory holding one folder per emote package (default: <workdir>/packages)
    #[arg(short, long, global = true)]
    pub packages_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create the emote store if it does not exist
    Init,

    /// Clear the store and re-import every package manifest
    Ingest,

    /// Write snapshots of the store
    Export {
        /// Formats to write (default: all)
        #[arg(short, long, value_delimiter = ',')]
        format: Option<Vec<ExportFormat>>,
    },

    /// Copy (or move) emote images into a flat directory named by danmaku name.
    /// The destination directory is emptied first
    Relocate {
        /// Move images instead of copying them
        #[arg(long = "move")]
        move_files: bool,

        /// Destination directory (default: <workdir>/emotes)
        #[arg(long)]
        dest: Option<PathBuf>,
    },

    /// Guess missing emote names from danmaku names and patch manifests
    Repair {
        /// Show planned repairs without executing
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Rejection report to read (default: <workdir>/invalid_emotes.json)
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Show store statistics and recent ingestion runs
    Stats,

    /// Run several steps in one invocation, in pipeline order
    Run(RunArgs),

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Steps for `run`. Executed in the order listed.
#[derive(Args, Clone, Default)]
pub(crate) struct RunArgs {
    /// Create the store
    #[arg(long)]
    pub init: bool,

    /// Clear and re-import manifests
    #[arg(long)]
    pub ingest: bool,

    /// Export CSV
    #[arg(long)]
    pub csv: bool,

    /// Export pretty JSON
    #[arg(long)]
    pub json: bool,

    /// Export compact JSON
    #[arg(long)]
    pub json_min: bool,

    /// Relocate images
    #[arg(long)]
    pub img: bool,

    /// With --img, move images instead of copying them
    #[arg(long = "move", requires = "img")]
    pub move_files: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ExportFormat {
    Csv,
    Json,
    JsonMin,
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the settings file path
    Path,

    /// Show the settings file and the resolved paths
    Show,
}
