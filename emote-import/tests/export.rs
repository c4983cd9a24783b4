use std::collections::HashSet;

use emote_catalog::types::*;
use emote_db::*;
use emote_import::*;
use tempfile::TempDir;

fn setup_db() -> rusqlite::Connection {
    let conn = open_memory().unwrap();
    let rows = [
        ("tv", Some("a1.png"), "TV Emotes", "smile", "[tv_smile]"),
        ("tv", None, "TV Emotes", "cry, loudly", "[tv_cry]"),
        ("2233", Some("w.png"), "2233 \"Girls\"", "wave", "[2233_wave]"),
    ];
    for (folder, og, package, emote, danmaku) in rows {
        let record = EmoteRecord {
            folder_name: folder.to_string(),
            og_file_name: og.map(str::to_string),
            package_name: package.to_string(),
            emote_name: emote.to_string(),
            danmaku_name: danmaku.to_string(),
        };
        try_insert_emote(&conn, &record).unwrap();
    }
    conn
}

#[test]
fn csv_has_header_in_column_order() {
    let conn = setup_db();
    let csv = String::from_utf8(render_csv(&all_emotes(&conn).unwrap()).unwrap()).unwrap();
    let header = csv.lines().next().unwrap();
    assert_eq!(
        header,
        "id,folder_name,og_file_name,package_name,emote_name,danmaku_name"
    );
    assert_eq!(csv.lines().count(), 4);
}

#[test]
fn compact_json_has_no_whitespace_between_tokens() {
    let conn = setup_db();
    let emotes = all_emotes(&conn).unwrap();
    let compact = render_json(&emotes, JsonStyle::Compact).unwrap();
    let pretty = render_json(&emotes, JsonStyle::Pretty).unwrap();

    assert!(!compact.contains('\n'));
    assert!(compact.starts_with("[{\"id\":1,\"folder_name\":\"tv\""));
    assert!(pretty.contains("\n  {\n    \"id\": 1,"));
}

#[test]
fn all_three_exports_describe_the_same_records() {
    let conn = setup_db();
    let tmp = TempDir::new().unwrap();
    let csv_path = tmp.path().join("out").join("emote.csv");
    let json_path = tmp.path().join("out").join("emote.json");
    let min_path = tmp.path().join("out").join("emote.min.json");

    assert_eq!(export_csv(&conn, &csv_path).unwrap(), 3);
    assert_eq!(export_json(&conn, &json_path, JsonStyle::Pretty).unwrap(), 3);
    assert_eq!(export_json(&conn, &min_path, JsonStyle::Compact).unwrap(), 3);

    let from_min: Vec<StoredEmote> =
        serde_json::from_str(&std::fs::read_to_string(&min_path).unwrap()).unwrap();
    let from_pretty: Vec<StoredEmote> =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    let from_csv: Vec<StoredEmote> = csv::Reader::from_path(&csv_path)
        .unwrap()
        .deserialize()
        .collect::<Result<_, _>>()
        .unwrap();

    let min_set: HashSet<_> = from_min.into_iter().collect();
    let pretty_set: HashSet<_> = from_pretty.into_iter().collect();
    let csv_set: HashSet<_> = from_csv.into_iter().collect();
    assert_eq!(min_set, pretty_set);
    assert_eq!(min_set, csv_set);
    assert_eq!(min_set.len(), 3);
}

#[test]
fn empty_store_refuses_every_export() {
    let conn = open_memory().unwrap();
    let tmp = TempDir::new().unwrap();

    let csv_path = tmp.path().join("emote.csv");
    assert!(matches!(export_csv(&conn, &csv_path), Err(ExportError::EmptyStore)));
    assert!(matches!(
        export_json(&conn, &tmp.path().join("emote.json"), JsonStyle::Pretty),
        Err(ExportError::EmptyStore)
    ));
    assert!(matches!(
        export_json(&conn, &tmp.path().join("emote.min.json"), JsonStyle::Compact),
        Err(ExportError::EmptyStore)
    ));
    assert!(!csv_path.exists());
}
