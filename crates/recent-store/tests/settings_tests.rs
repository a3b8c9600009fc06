use pretty_assertions::assert_eq;
use recent_paths::{NamedRoot, NormalizedPath, RelocatablePath};
use recent_store::{Error, RecentFiles, SettingsStore};
use rstest::rstest;
use serde::{Deserialize, Serialize};
use std::fs;
use tempfile::TempDir;

fn sample_list() -> RecentFiles {
    let roots = vec![NamedRoot::new("basedir", "/projects/demo")];
    let mut list = RecentFiles::new();
    list.add(RelocatablePath::create("/elsewhere/raw.h5", &[]));
    list.add(RelocatablePath::create("/projects/demo/sets/x.h5", &roots));
    list
}

#[rstest]
#[case("recent.json")]
#[case("recent.yaml")]
#[case("recent.yml")]
fn round_trips_the_recent_list(#[case] file_name: &str) {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join(file_name));
    let store = SettingsStore::new();
    let list = sample_list();

    store.save(&path, &list).unwrap();
    let back: RecentFiles = store.load(&path).unwrap();

    assert_eq!(back, list);
    assert_eq!(back.front().unwrap().root_name(), Some("basedir"));
}

// TOML has no top-level sequences, so hosts embedding the list in a TOML
// settings file wrap it in a table.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct HostSettings {
    recent_files: RecentFiles,
}

#[test]
fn round_trips_inside_a_toml_document() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("settings.toml"));
    let store = SettingsStore::new();
    let settings = HostSettings {
        recent_files: sample_list(),
    };

    store.save(&path, &settings).unwrap();
    let back: HostSettings = store.load(&path).unwrap();
    assert_eq!(back, settings);
}

#[test]
fn save_creates_missing_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("nested/dir/recent.json"));

    SettingsStore::new().save(&path, &sample_list()).unwrap();
    assert!(path.exists());
}

#[test]
fn save_leaves_no_temp_file_behind() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("recent.json"));

    SettingsStore::new().save(&path, &sample_list()).unwrap();

    let entries: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries, vec!["recent.json".to_string()]);
}

#[test]
fn rejects_unknown_extensions() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("recent.ini"));

    let err = SettingsStore::new().save(&path, &sample_list()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }));
}

#[test]
fn load_reports_missing_files_as_io_errors() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("recent.json"));

    let err = SettingsStore::new().load::<RecentFiles>(&path).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn load_or_default_swallows_missing_and_corrupt_files() {
    let temp = TempDir::new().unwrap();
    let store = SettingsStore::new();

    let missing = NormalizedPath::new(temp.path().join("missing.json"));
    assert!(store.load_or_default(&missing).is_empty());

    let corrupt = NormalizedPath::new(temp.path().join("corrupt.json"));
    fs::write(corrupt.to_native(), "{ not json").unwrap();
    assert!(store.load_or_default(&corrupt).is_empty());
}

#[test]
fn save_overwrites_previous_contents() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("recent.json"));
    let store = SettingsStore::new();

    store.save(&path, &sample_list()).unwrap();
    store.save(&path, &RecentFiles::new()).unwrap();

    let back: RecentFiles = store.load(&path).unwrap();
    assert!(back.is_empty());
}
