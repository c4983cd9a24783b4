//! Progress callbacks for ingestion and asset relocation.

/// Receives progress from [`ingest_packages`](crate::ingest_packages) and
/// [`relocate_assets`](crate::relocate_assets).
pub trait ImportProgress {
    /// A package folder has been ingested (or skipped for lack of a manifest).
    fn on_folder(&self, current: usize, total: usize, folder: &str);

    /// One emote image has been copied or moved to `<danmaku_name>.png`.
    fn on_asset(&self, current: usize, total: usize, danmaku_name: &str);

    /// A pipeline phase is starting, e.g. clearing the store.
    fn on_phase(&self, message: &str);

    fn on_complete(&self, message: &str);
}

/// Discards all updates.
pub struct SilentProgress;

impl ImportProgress for SilentProgress {
    fn on_folder(&self, _current: usize, _total: usize, _folder: &str) {}
    fn on_asset(&self, _current: usize, _total: usize, _danmaku_name: &str) {}
    fn on_phase(&self, _message: &str) {}
    fn on_complete(&self, _message: &str) {}
}

/// Reports through the `log` crate.
///
/// Package folders are few and each is logged. Relocation can touch
/// thousands of images, so only every hundredth and the last one are
/// logged at info level.
pub struct LogProgress;

const ASSET_LOG_INTERVAL: usize = 100;

impl ImportProgress for LogProgress {
    fn on_folder(&self, current: usize, total: usize, folder: &str) {
        log::info!("  [{}/{}] package {}", current, total, folder);
    }

    fn on_asset(&self, current: usize, total: usize, danmaku_name: &str) {
        if current % ASSET_LOG_INTERVAL == 0 || current == total {
            log::info!("  [{}/{}] images relocated", current, total);
        } else {
            log::debug!("  [{}/{}] {}.png", current, total, danmaku_name);
        }
    }

    fn on_phase(&self, message: &str) {
        log::info!("{}", message);
    }

    fn on_complete(&self, message: &str) {
        log::info!("{}", message);
    }
}
