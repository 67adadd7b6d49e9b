// Tests for import_csv
// - Header line is skipped
// - Existing words are overwritten in place
// - Missing target database is fatal

use std::fs;

use tempfile::TempDir;
use yeok_core::{Store, StoreError};

use super::mapping;
use crate::{SqliteStore, import_csv};

fn setup() -> (SqliteStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = SqliteStore::new(temp_dir.path().join("dictionary.db"));
    (store, temp_dir)
}

#[test]
fn test_import_skips_header() {
    let (store, temp_dir) = setup();
    store.create().unwrap();
    let source = temp_dir.path().join("words.csv");
    fs::write(&source, "korean,russian\n눈,снег\n비,дождь\n").unwrap();

    let imported = import_csv(&source, &store).unwrap();

    assert_eq!(imported, 2);
    assert_eq!(
        store.load().unwrap(),
        mapping(&[("눈", &["снег"]), ("비", &["дождь"])])
    );
}

#[test]
fn test_import_overwrites_existing_word() {
    let (store, temp_dir) = setup();
    store
        .save(&mapping(&[("눈", &["глаз"]), ("해", &["солнце"])]))
        .unwrap();
    let source = temp_dir.path().join("words.csv");
    fs::write(&source, "word,translation\n눈,снег\n").unwrap();

    import_csv(&source, &store).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.get("눈").unwrap(), &vec!["снег".to_string()]);
    assert_eq!(loaded.get("해").unwrap(), &vec!["солнце".to_string()]);
}

#[test]
fn test_import_keeps_existing_word_order() {
    let (store, temp_dir) = setup();
    store
        .save(&mapping(&[
            ("눈", &["глаз"]),
            ("비", &["дождь"]),
            ("해", &["солнце"]),
        ]))
        .unwrap();
    let source = temp_dir.path().join("words.csv");
    fs::write(&source, "word,translation
눈,снег
달,луна
").unwrap();

    import_csv(&source, &store).unwrap();

    let loaded = store.load().unwrap();
    let words: Vec<&str> = loaded.keys().map(String::as_str).collect();
    assert_eq!(words, vec!["눈", "비", "해", "달"]);
    assert_eq!(loaded.get("눈").unwrap(), &vec!["снег".to_string()]);
}

#[test]
fn test_import_skips_short_rows() {
    let (store, temp_dir) = setup();
    store.create().unwrap();
    let source = temp_dir.path().join("words.csv");
    fs::write(&source, "word,translation\n눈,снег\nорфан\n").unwrap();

    assert_eq!(import_csv(&source, &store).unwrap(), 1);
}

#[test]
fn test_import_into_missing_database_fails() {
    let (store, temp_dir) = setup();
    let source = temp_dir.path().join("words.csv");
    fs::write(&source, "word,translation\n눈,снег\n").unwrap();

    let err = import_csv(&source, &store).unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));
    assert!(!store.location().exists());
}

#[test]
fn test_import_missing_source_is_io_error() {
    let (store, temp_dir) = setup();
    store.create().unwrap();

    let err = import_csv(&temp_dir.path().join("absent.csv"), &store).unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));
}
