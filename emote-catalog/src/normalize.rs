//! Turn raw manifest entries into canonical records.
//!
//! Checks run in a fixed order: non-image references are dropped first,
//! then a missing alias is rejected, then a missing chat token. An entry
//! missing both names lands only in the `missing_emote_name` bucket.

use crate::types::{EmoteRecord, RawEmoteEntry, RejectReason};

/// Result of normalizing one raw entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Not an image reference. Not persisted and not bucketed.
    Dropped,
    /// Failed validation; kept for the rejection report.
    Rejected(RejectReason, EmoteRecord),
    /// Valid and ready for the dedup store.
    Candidate(EmoteRecord),
}

/// Whether `url` points at an emote image.
pub fn is_image_reference(url: &str) -> bool {
    url.contains(".png")
}

/// Final `/`-delimited segment of `url`.
pub fn og_file_name(url: &str) -> String {
    url.rsplit('/').next().unwrap_or(url).to_string()
}

/// Normalize one raw entry found in `folder_name` under `package_name`.
pub fn normalize_entry(folder_name: &str, package_name: &str, entry: &RawEmoteEntry) -> Outcome {
    if !is_image_reference(&entry.asset_url) {
        return Outcome::Dropped;
    }

    let record = EmoteRecord {
        folder_name: folder_name.to_string(),
        og_file_name: Some(og_file_name(&entry.asset_url)),
        package_name: package_name.to_string(),
        emote_name: entry.alias.clone(),
        danmaku_name: entry.danmaku_text.clone(),
    };

    if entry.alias.is_empty() {
        Outcome::Rejected(RejectReason::MissingEmoteName, record)
    } else if entry.danmaku_text.is_empty() {
        Outcome::Rejected(RejectReason::MissingDanmakuName, record)
    } else {
        Outcome::Candidate(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(alias: &str, text: &str, url: &str) -> RawEmoteEntry {
        RawEmoteEntry {
            alias: alias.to_string(),
            danmaku_text: text.to_string(),
            asset_url: url.to_string(),
        }
    }

    #[test]
    fn valid_entry_is_candidate() {
        let out = normalize_entry("tv", "TV", &entry("smile", "[tv_smile]", "https://i0.hdslb.com/bfs/a1.png"));
        match out {
            Outcome::Candidate(r) => {
                assert_eq!(r.folder_name, "tv");
                assert_eq!(r.package_name, "TV");
                assert_eq!(r.emote_name, "smile");
                assert_eq!(r.danmaku_name, "[tv_smile]");
                assert_eq!(r.og_file_name.as_deref(), Some("a1.png"));
            }
            other => panic!("expected candidate, got {:?}", other),
        }
    }

    #[test]
    fn video_reference_is_dropped() {
        let out = normalize_entry("tv", "TV", &entry("clip", "[clip]", "https://x/clip.mp4"));
        assert_eq!(out, Outcome::Dropped);
    }

    #[test]
    fn drop_wins_over_missing_names() {
        let out = normalize_entry("tv", "TV", &entry("", "", "https://x/clip.gif"));
        assert_eq!(out, Outcome::Dropped);
    }

    #[test]
    fn missing_both_names_is_missing_emote_name() {
        let out = normalize_entry("tv", "TV", &entry("", "", "https://x/a.png"));
        assert!(matches!(out, Outcome::Rejected(RejectReason::MissingEmoteName, _)));
    }

    #[test]
    fn missing_danmaku_name() {
        let out = normalize_entry("tv", "TV", &entry("smile", "", "https://x/a.png"));
        match out {
            Outcome::Rejected(reason, r) => {
                assert_eq!(reason, RejectReason::MissingDanmakuName);
                assert_eq!(r.og_file_name.as_deref(), Some("a.png"));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn cdn_suffix_still_counts_as_image() {
        assert!(is_image_reference("https://x/a.png@100w.webp"));
        assert_eq!(og_file_name("https://x/a.png@100w.webp"), "a.png@100w.webp");
    }

    #[test]
    fn og_file_name_without_slash() {
        assert_eq!(og_file_name("a.png"), "a.png");
    }
}
