use emote_db::open_memory;
use emote_db::schema::{CURRENT_VERSION, create_schema};

#[test]
fn create_schema_in_memory() {
    let conn = open_memory().unwrap();
    let version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(version, CURRENT_VERSION);
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    create_schema(&conn).unwrap();
    let rows: i32 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn all_tables_exist() {
    let conn = open_memory().unwrap();
    for table in ["schema_version", "emotes", "import_log"] {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "table '{}' should exist", table);
    }
}

#[test]
fn open_database_creates_parent_and_reopens() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("temp").join("emote.db");

    {
        let conn = emote_db::open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO emotes (folder_name, package_name, emote_name, danmaku_name)
             VALUES ('tv', 'TV', 'smile', '[tv_smile]')",
            [],
        )
        .unwrap();
    }

    let conn = emote_db::open_database(&path).unwrap();
    assert_eq!(emote_db::emote_count(&conn).unwrap(), 1);
}

#[test]
fn newer_schema_is_refused() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("emote.db");
    {
        let conn = emote_db::open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [CURRENT_VERSION + 1],
        )
        .unwrap();
    }

    let err = emote_db::open_database(&path).unwrap_err();
    assert!(matches!(err, emote_db::SchemaError::VersionMismatch { .. }));
}
