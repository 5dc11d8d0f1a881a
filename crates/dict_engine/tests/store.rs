use std::fs;

use dict_core::{DefinitionResult, ResultMap};
use dict_engine::{ensure_output_dir, job_output_filename, ResultStore, SnapshotWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn output_filename_is_deterministic_in_the_job_number() {
    assert_eq!(job_output_filename(1), "definitions_job_1.json");
    assert_eq!(job_output_filename(20), "definitions_job_20.json");
}

#[test]
fn every_record_leaves_a_complete_parseable_snapshot() {
    let temp = TempDir::new().unwrap();
    let mut store = ResultStore::new(temp.path().to_path_buf(), 1);

    let words = ["cat", "dog", "fish"];
    for (i, word) in words.iter().enumerate() {
        store
            .record(DefinitionResult::new(i, *word, format!("<li>{word}</li>\n")))
            .unwrap();

        // The file on disk reflects exactly the words recorded so far.
        let json = fs::read_to_string(store.output_path()).unwrap();
        let map: ResultMap = serde_json::from_str(&json).unwrap();
        assert_eq!(map.len(), i + 1);
        for recorded in &words[..=i] {
            assert!(map.contains_key(*recorded));
        }
    }
}

#[test]
fn recording_a_word_twice_keeps_the_newest_value() {
    let temp = TempDir::new().unwrap();
    let mut store = ResultStore::new(temp.path().to_path_buf(), 2);

    store
        .record(DefinitionResult::new(0, "cat", "old"))
        .unwrap();
    store
        .record(DefinitionResult::new(0, "cat", "new"))
        .unwrap();

    assert_eq!(store.len(), 1);
    let json = fs::read_to_string(store.output_path()).unwrap();
    let map: ResultMap = serde_json::from_str(&json).unwrap();
    assert_eq!(map["cat"].html, "new");
}

#[test]
fn snapshot_replaces_the_file_instead_of_appending() {
    let temp = TempDir::new().unwrap();
    let mut store = ResultStore::new(temp.path().to_path_buf(), 3);

    store
        .record(DefinitionResult::new(0, "cat", "<li>x</li>\n"))
        .unwrap();
    let first_len = fs::metadata(store.output_path()).unwrap().len();
    store
        .record(DefinitionResult::new(0, "cat", "<li>x</li>\n"))
        .unwrap();
    let second_len = fs::metadata(store.output_path()).unwrap().len();

    // Identical content rewritten wholesale, not appended.
    assert_eq!(first_len, second_len);
}

#[test]
fn no_partial_file_on_write_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = SnapshotWriter::new(file_path.clone());
    let mut map = ResultMap::new();
    map.insert("cat".to_string(), DefinitionResult::new(0, "cat", ""));
    let result = writer.write_json("definitions_job_9.json", &map);
    assert!(result.is_err());
    assert!(!file_path.with_file_name("definitions_job_9.json").exists());
}
