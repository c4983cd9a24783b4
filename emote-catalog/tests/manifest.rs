use std::fs;

use emote_catalog::*;
use tempfile::TempDir;

const TV_MANIFEST: &str = r#"{
  "data": {
    "packages": [
      {
        "text": "TV Emotes",
        "emote": [
          { "text": "[tv_smile]", "url": "https://i0.hdslb.com/bfs/emote/a1.png", "meta": { "alias": "smile" } },
          { "text": "[tv_clip]", "url": "https://i0.hdslb.com/bfs/emote/clip.mp4", "meta": { "alias": "clip" } }
        ]
      }
    ]
  }
}"#;

#[test]
fn read_manifest_parses_packages() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("tv")).unwrap();
    fs::write(tmp.path().join("tv").join("tv.json"), TV_MANIFEST).unwrap();

    let manifest = read_manifest(tmp.path(), "tv").unwrap().unwrap();
    assert_eq!(manifest.packages.len(), 1);
    let pkg = &manifest.packages[0];
    assert_eq!(pkg.package_name, "TV Emotes");
    assert_eq!(pkg.entries.len(), 2);
    assert_eq!(pkg.entries[0].alias, "smile");
    assert_eq!(pkg.entries[0].danmaku_text, "[tv_smile]");
}

#[test]
fn missing_manifest_is_absent_not_error() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("empty")).unwrap();
    assert!(read_manifest(tmp.path(), "empty").unwrap().is_none());
}

#[test]
fn malformed_manifest_is_error_with_path() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("bad")).unwrap();
    fs::write(tmp.path().join("bad").join("bad.json"), "{ not json").unwrap();

    let err = read_manifest(tmp.path(), "bad").unwrap_err();
    assert!(matches!(err, ManifestError::Parse { .. }));
    assert!(err.to_string().contains("bad.json"));
}

#[test]
fn entry_without_url_is_malformed() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("nourl")).unwrap();
    fs::write(
        tmp.path().join("nourl").join("nourl.json"),
        r#"{"data":{"packages":[{"text":"P","emote":[{"text":"[x]","meta":{"alias":"x"}}]}]}}"#,
    )
    .unwrap();
    assert!(read_manifest(tmp.path(), "nourl").is_err());
}

#[test]
fn list_package_folders_sorted_and_dirs_only() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("zeta")).unwrap();
    fs::create_dir(tmp.path().join("alpha")).unwrap();
    fs::write(tmp.path().join("README.md"), "hi").unwrap();

    let folders = list_package_folders(tmp.path()).unwrap();
    assert_eq!(folders, vec!["alpha".to_string(), "zeta".to_string()]);
}

#[test]
fn list_package_folders_missing_root() {
    let tmp = TempDir::new().unwrap();
    let err = list_package_folders(&tmp.path().join("nope")).unwrap_err();
    assert!(matches!(err, ManifestError::DirNotFound(_)));
}

#[cfg(unix)]
#[test]
fn list_package_folders_follows_symlinks() {
    let tmp = TempDir::new().unwrap();
    let real = tmp.path().join("store").join("tv");
    fs::create_dir_all(&real).unwrap();
    fs::write(real.join("tv.json"), TV_MANIFEST).unwrap();

    let packages = tmp.path().join("packages");
    fs::create_dir(&packages).unwrap();
    std::os::unix::fs::symlink(&real, packages.join("tv")).unwrap();
    std::os::unix::fs::symlink(real.join("tv.json"), packages.join("loose.json")).unwrap();

    let folders = list_package_folders(&packages).unwrap();
    assert_eq!(folders, vec!["tv".to_string()]);
    assert!(read_manifest(&packages, "tv").unwrap().is_some());
}
