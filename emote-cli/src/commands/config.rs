use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::cli_types::ConfigAction;
use crate::settings::{Paths, settings_path};

pub(crate) fn run_config(action: ConfigAction, paths: &Paths) -> Result<(), CliError> {
    let settings_file = settings_path();
    match action {
        ConfigAction::Path => {
            log::info!("{}", settings_file.display());
        }
        ConfigAction::Show => {
            log::info!(
                "{}",
                "Settings file".if_supports_color(Stdout, |t| t.bold()),
            );
            if settings_file.exists() {
                log::info!("  {}", settings_file.display());
                crate::log_blank();
                for line in std::fs::read_to_string(&settings_file)?.lines() {
                    log::info!("  {}", line);
                }
            } else {
                log::info!("  {} (not present)", settings_file.display());
            }

            crate::log_blank();
            log::info!(
                "{}",
                "Resolved paths".if_supports_color(Stdout, |t| t.bold()),
            );
            log::info!("  Database:       {}", paths.database.display());
            log::info!("  Packages:       {}", paths.packages.display());
            log::info!("  Emote images:   {}", paths.emotes.display());
            log::info!("  Reject report:  {}", paths.report.display());
            log::info!("  CSV:            {}", paths.csv.display());
            log::info!("  JSON:           {}", paths.json.display());
            log::info!("  JSON (min):     {}", paths.json_min.display());
        }
    }
    Ok(())
}
