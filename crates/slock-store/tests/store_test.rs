//! Store round-trip and crash-consistency tests.

use slock_core::{LockRecord, Secret};
use slock_store::{StateStore, StoreError};

fn sample_record() -> LockRecord {
    LockRecord {
        locked: true,
        temp_password: Secret::new("1234"),
        temp_active: true,
        permanent_password: Secret::new("hunter2"),
        qos: 2,
    }
}

#[test]
fn round_trip_preserves_all_fields() {
    let dir = tempfile::tempdir().unwrap();
    let store = StateStore::new(dir.path().join("lock.json"));

    let record = sample_record();
    store.save(&record).unwrap();

    assert_eq!(store.load().unwrap(), record);
}

#[test]
fn save_replaces_the_existing_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = StateStore::new(dir.path().join("lock.json"));

    store.save(&sample_record()).unwrap();

    let mut updated = sample_record();
    updated.locked = false;
    updated.temp_active = false;
    store.save(&updated).unwrap();

    assert_eq!(store.load().unwrap(), updated);
}

#[test]
fn save_leaves_no_staging_files_behind() {
    let dir = tempfile::tempdir().unwrap();
    let store = StateStore::new(dir.path().join("lock.json"));

    store.save(&sample_record()).unwrap();
    store.save(&sample_record()).unwrap();

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn load_of_missing_record_errors() {
    let dir = tempfile::tempdir().unwrap();
    let store = StateStore::new(dir.path().join("missing.json"));

    assert!(matches!(store.load(), Err(StoreError::Io { .. })));
}

#[test]
fn load_of_malformed_record_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lock.json");
    std::fs::write(&path, b"{\"locked\": true").unwrap();

    let store = StateStore::new(path);
    assert!(matches!(store.load(), Err(StoreError::Decode { .. })));
}

#[test]
fn failed_save_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();

    // The target path is a directory, so the final rename must fail - and
    // report it, rather than silently dropping the record.
    let target = dir.path().join("lock.json");
    std::fs::create_dir(&target).unwrap();

    let store = StateStore::new(target);
    assert!(matches!(store.save(&sample_record()), Err(StoreError::Io { .. })));
}

#[test]
fn failed_save_leaves_previous_record_intact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lock.json");

    let store = StateStore::new(&path);
    store.save(&sample_record()).unwrap();

    // Point a second store at a path whose parent does not exist; staging
    // fails before anything touches the original record.
    let broken = StateStore::new(dir.path().join("no-such-dir").join("lock.json"));
    assert!(broken.save(&sample_record()).is_err());

    assert_eq!(store.load().unwrap(), sample_record());
}
