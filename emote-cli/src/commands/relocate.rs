use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use emote_import::{LogProgress, RelocateMode, relocate_assets};

use crate::CliError;
use crate::settings::Paths;

/// Copy or move every stored emote image to `<dest>/<danmaku_name>.png`.
pub(crate) fn run_relocate(paths: &Paths, dest: &Path, mode: RelocateMode) -> Result<(), CliError> {
    let conn = super::open_store(&paths.database)?;

    log::warn!(
        "{}",
        format!("Emptying {} before relocating images", dest.display())
            .if_supports_color(Stdout, |t| t.yellow()),
    );
    if mode == RelocateMode::Move {
        log::info!(
            "{}",
            "Move mode: source images will be removed".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let stats = relocate_assets(&conn, &paths.packages, dest, mode, Some(&LogProgress))
        .map_err(|e| CliError::relocate(e.to_string()))?;

    log::info!(
        "{} {} images to {}",
        match mode {
            RelocateMode::Copy => "Copied",
            RelocateMode::Move => "Moved",
        },
        stats.relocated,
        dest.display(),
    );
    Ok(())
}
