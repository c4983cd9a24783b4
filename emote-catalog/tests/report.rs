use emote_catalog::*;
use tempfile::TempDir;

fn record(emote: &str, danmaku: &str, og: &str) -> EmoteRecord {
    EmoteRecord {
        folder_name: "tv".to_string(),
        og_file_name: Some(og.to_string()),
        package_name: "TV".to_string(),
        emote_name: emote.to_string(),
        danmaku_name: danmaku.to_string(),
    }
}

fn sample_buckets() -> RejectionBuckets {
    let mut buckets = RejectionBuckets::default();
    buckets.push(RejectReason::MissingEmoteName, record("", "[tv_x]", "x.png"));
    buckets.push(RejectReason::MissingDanmakuName, record("y", "", "y.png"));
    buckets.push(RejectReason::DuplicateDanmakuName, record("z", "[tv_smile]", "z.png"));
    buckets
}

#[test]
fn report_folds_duplicates_into_danmaku_name() {
    let report = RejectionReport::from_buckets(&sample_buckets());
    assert_eq!(report.emote_name.len(), 1);
    assert_eq!(report.danmaku_name.len(), 2);
    assert_eq!(report.danmaku_name[0].emote_name, "y");
    assert_eq!(report.danmaku_name[1].emote_name, "z");
}

#[test]
fn report_file_recovers_all_three_buckets() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("invalid_emotes.json");
    let buckets = sample_buckets();

    RejectionReport::from_buckets(&buckets).write_to(&path).unwrap();
    let read = RejectionReport::read_from(&path).unwrap().into_buckets();

    assert_eq!(read, buckets);
    assert_eq!(read.total(), 3);
}

#[test]
fn report_json_uses_two_named_arrays() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("invalid_emotes.json");
    RejectionReport::default().write_to(&path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(value["emote_name"].as_array().unwrap().is_empty());
    assert!(value["danmaku_name"].as_array().unwrap().is_empty());
}

#[test]
fn reading_missing_report_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = RejectionReport::read_from(&tmp.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ReportError::Io { .. }));
}
