//! End-to-end flow: open files under a workflow base directory, persist the
//! recent list, move the whole project, restart, and re-find every file.

use assert_fs::prelude::*;
use predicates::prelude::*;
use recent_paths::{NamedRoot, NormalizedPath, RelocatablePath};
use recent_store::{RecentFiles, SettingsStore};

#[test]
fn recent_files_survive_a_project_move() {
    let temp = assert_fs::TempDir::new().unwrap();

    // Session one: a project at `workspace/old` with two datasets.
    let old_project = temp.child("old");
    old_project.child("sets").create_dir_all().unwrap();
    old_project.child("sets/first.h5").touch().unwrap();
    old_project.child("sets/second.h5").touch().unwrap();
    let old_roots = vec![NamedRoot::new("basedir", old_project.path())];

    let mut list = RecentFiles::new();
    for name in ["sets/first.h5", "sets/second.h5"] {
        let opened = old_project.path().join(name);
        list.add(RelocatablePath::create(opened.to_str().unwrap(), &old_roots));
    }
    assert!(list.iter().all(RelocatablePath::is_anchored));

    let settings_path = NormalizedPath::new(temp.child("settings/recent.json").path());
    let store = SettingsStore::new();
    store.save(&settings_path, &list).unwrap();
    temp.child("settings/recent.json")
        .assert(predicate::path::exists());

    // The project moves wholesale between sessions.
    std::fs::rename(old_project.path(), temp.child("new").path()).unwrap();
    let new_project = temp.child("new");
    let new_roots = vec![NamedRoot::new("basedir", new_project.path())];

    // Session two: reload and re-anchor.
    let mut reloaded = store.load_or_default(&settings_path);
    assert_eq!(reloaded, list);

    // The stale absolute paths no longer resolve on their own...
    assert!(reloaded.front().unwrap().locate(&[]).is_none());
    // ...but every entry relocates under the moved root.
    let dropped = reloaded.relocate(&new_roots);
    assert_eq!(dropped, 0);

    for entry in &reloaded {
        let located = entry.locate(&new_roots).expect("file exists after move");
        assert!(located.exists());
        assert!(
            located
                .as_str()
                .starts_with(NormalizedPath::new(new_project.path()).as_str())
        );
    }

    // Persist the re-anchored list and make sure the triples round-trip.
    store.save(&settings_path, &reloaded).unwrap();
    let final_list: RecentFiles = store.load(&settings_path).unwrap();
    assert_eq!(final_list, reloaded);
    assert_eq!(
        final_list.front().unwrap().root_name(),
        Some("basedir"),
        "anchor survives relocation and persistence"
    );
}

#[test]
fn selecting_an_old_entry_moves_it_to_the_front() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.h5").touch().unwrap();
    temp.child("b.h5").touch().unwrap();
    let roots = vec![NamedRoot::new("basedir", temp.path())];

    let mut list = RecentFiles::new();
    list.add(RelocatablePath::create(
        temp.path().join("a.h5").to_str().unwrap(),
        &roots,
    ));
    list.add(RelocatablePath::create(
        temp.path().join("b.h5").to_str().unwrap(),
        &roots,
    ));

    // The combo box shows b.h5 first; the user picks the second entry.
    assert!(list.promote(1));
    assert_eq!(list.front().unwrap().base_name(), "a.h5");

    // Re-opening the front entry needs no relocation at all.
    let located = list.front().unwrap().locate(&roots).unwrap();
    assert_eq!(located, *list.front().unwrap().abs_path());
}
