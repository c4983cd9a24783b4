//! Settings file and path resolution.
//!
//! The settings file lives at `~/.config/emote-db/settings.toml`:
//! ```toml
//! [paths]
//! workdir = "/data/emotes/temp"
//! packages = "/data/emotes/packages"
//! ```
//! Every path resolves through the chain CLI flag → settings file → default
//! under the working directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::CliError;
use crate::cli_types::PathArgs;

const DEFAULT_WORKDIR: &str = "temp";

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Settings {
    #[serde(default)]
    pub paths: PathSettings,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PathSettings {
    pub workdir: Option<PathBuf>,
    pub database: Option<PathBuf>,
    pub packages: Option<PathBuf>,
    pub emotes: Option<PathBuf>,
}

/// Canonical path to the settings file.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("emote-db").join("settings.toml")
}

/// Load the settings file. A missing file yields defaults.
pub(crate) fn load_settings(path: &Path) -> Result<Settings, CliError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e.into()),
    };
    toml::from_str(&contents)
        .map_err(|e| CliError::config(format!("{}: {}", path.display(), e)))
}

/// Every location a command may touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Paths {
    pub database: PathBuf,
    pub packages: PathBuf,
    pub emotes: PathBuf,
    pub report: PathBuf,
    pub csv: PathBuf,
    pub json: PathBuf,
    pub json_min: PathBuf,
}

impl Paths {
    pub(crate) fn resolve(args: &PathArgs, settings: &Settings) -> Self {
        let s = &settings.paths;
        let workdir = args
            .workdir
            .clone()
            .or_else(|| s.workdir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WORKDIR));

        Self {
            database: args
                .db
                .clone()
                .or_else(|| s.database.clone())
                .unwrap_or_else(|| workdir.join("emote.db")),
            packages: args
                .packages_dir
                .clone()
                .or_else(|| s.packages.clone())
                .unwrap_or_else(|| workdir.join("packages")),
            emotes: s.emotes.clone().unwrap_or_else(|| workdir.join("emotes")),
            report: workdir.join("invalid_emotes.json"),
            csv: workdir.join("emote.csv"),
            json: workdir.join("emote.json"),
            json_min: workdir.join("emote.min.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_live_under_temp() {
        let paths = Paths::resolve(&PathArgs::default(), &Settings::default());
        assert_eq!(paths.database, PathBuf::from("temp/emote.db"));
        assert_eq!(paths.packages, PathBuf::from("temp/packages"));
        assert_eq!(paths.emotes, PathBuf::from("temp/emotes"));
        assert_eq!(paths.report, PathBuf::from("temp/invalid_emotes.json"));
        assert_eq!(paths.json_min, PathBuf::from("temp/emote.min.json"));
    }

    #[test]
    fn cli_flag_beats_settings() {
        let settings: Settings = toml::from_str(
            r#"
            [paths]
            workdir = "/srv/emotes"
            packages = "/srv/packages"
            "#,
        )
        .unwrap();
        let args = PathArgs {
            packages_dir: Some(PathBuf::from("/cli/packages")),
            ..Default::default()
        };

        let paths = Paths::resolve(&args, &settings);
        assert_eq!(paths.packages, PathBuf::from("/cli/packages"));
        assert_eq!(paths.database, PathBuf::from("/srv/emotes/emote.db"));
        assert_eq!(paths.csv, PathBuf::from("/srv/emotes/emote.csv"));
    }

    #[test]
    fn missing_settings_file_is_default() {
        let tmp = tempfile::TempDir::new().unwrap();
        let settings = load_settings(&tmp.path().join("settings.toml")).unwrap();
        assert!(settings.paths.workdir.is_none());
    }

    #[test]
    fn malformed_settings_file_is_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "[paths\nworkdir = ").unwrap();
        assert!(matches!(load_settings(&path), Err(CliError::Config(_))));
    }
}
