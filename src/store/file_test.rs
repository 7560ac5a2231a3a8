use super::*;

#[test]
fn open_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("kv.json")).unwrap();
    assert_eq!(store.get_item("anything").unwrap(), None);
    assert!(!store.path().exists());
}

#[test]
fn entries_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("kv.json");

    let store = FileStore::open(&path).unwrap();
    store.set_item("theme", "\"dark\"").unwrap();
    store.set_item("count", "3").unwrap();
    drop(store);

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get_item("theme").unwrap().as_deref(), Some("\"dark\""));
    assert_eq!(reopened.get_item("count").unwrap().as_deref(), Some("3"));
}

#[test]
fn remove_and_clear_are_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kv.json");

    let store = FileStore::open(&path).unwrap();
    store.set_item("a", "1").unwrap();
    store.set_item("b", "2").unwrap();
    store.remove_item("a").unwrap();
    store.remove_item("never-set").unwrap();

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get_item("a").unwrap(), None);
    assert_eq!(reopened.get_item("b").unwrap().as_deref(), Some("2"));

    reopened.clear().unwrap();
    let cleared = FileStore::open(&path).unwrap();
    assert_eq!(cleared.get_item("b").unwrap(), None);
}

#[test]
fn corrupt_file_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kv.json");
    std::fs::write(&path, "{not json").unwrap();

    assert!(matches!(FileStore::open(&path), Err(StorageError::Decode { .. })));
}

#[test]
fn blank_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kv.json");
    std::fs::write(&path, "  \n").unwrap();

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get_item("a").unwrap(), None);
}
