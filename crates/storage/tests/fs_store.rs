#![forbid(unsafe_code)]

use std::path::PathBuf;
use tm_core::model::{Note, Task, TaskStatus, Todo};
use tm_storage::{FsStore, TaskStore};

fn temp_dir(test_name: &str) -> PathBuf {
    let base = std::env::temp_dir();
    let pid = std::process::id();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let dir = base.join(format!("tm_storage_{test_name}_{pid}_{nonce}"));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn sample_task() -> Task {
    let mut task = Task::new("7".to_string(), "sample".to_string(), Some("1".to_string()), 1000);
    task.status = TaskStatus::InProgress;
    task.todos.insert(
        "1".to_string(),
        Todo {
            id: "1".to_string(),
            text: "first".to_string(),
            done: true,
            created_at_ms: 1001,
        },
    );
    task.notes.insert(
        "1".to_string(),
        Note {
            id: "1".to_string(),
            text: "a note".to_string(),
            note_type: "general".to_string(),
            created_at_ms: 1002,
        },
    );
    task.updated_at_ms = 1003;
    task
}

#[test]
fn records_round_trip_through_their_files() {
    let dir = temp_dir("round_trip");
    let mut store = FsStore::open(&dir).expect("open store");

    let task = sample_task();
    store.save_one(&task).expect("save");

    let loaded = store.load_one("7").expect("load").expect("present");
    assert_eq!(loaded, task);

    // The record is self-describing JSON under the task's own file name.
    let raw = std::fs::read_to_string(dir.join("task-7.json")).expect("read record file");
    assert!(raw.contains("\"status\": \"in_progress\""));
    assert!(raw.contains("\"type\": \"general\""));
    assert!(raw.contains("\"parent_id\": \"1\""));
}

#[test]
fn load_one_returns_none_for_missing_records() {
    let store = FsStore::open(temp_dir("load_missing")).expect("open store");
    assert!(store.load_one("42").expect("load").is_none());
}

#[test]
fn load_all_scans_only_well_formed_task_files() {
    let dir = temp_dir("scan_foreign");
    let mut store = FsStore::open(&dir).expect("open store");

    store.save_one(&sample_task()).expect("save");
    std::fs::write(dir.join("README.txt"), "not a record").expect("write foreign file");
    std::fs::write(dir.join("notes-1.json"), "{}").expect("write foreign json");
    std::fs::write(dir.join("task-.json"), "{}").expect("write empty-id file");

    let tasks = store.load_all().expect("load all");
    assert_eq!(tasks.len(), 1);
    assert!(tasks.contains_key("7"));
}

#[test]
fn a_reopened_store_sees_previous_saves() {
    let dir = temp_dir("reopen");
    {
        let mut store = FsStore::open(&dir).expect("open store");
        store.save_one(&sample_task()).expect("save");
    }

    let store = FsStore::open(&dir).expect("reopen store");
    let tasks = store.load_all().expect("load all");
    assert_eq!(tasks["7"].name, "sample");
}

#[test]
fn open_creates_the_storage_directory() {
    let dir = temp_dir("bootstrap").join("nested").join("deeper");
    assert!(!dir.exists());

    let store = FsStore::open(&dir).expect("open store");
    assert!(store.storage_dir().is_dir());
    assert!(store.load_all().expect("load all").is_empty());
}

#[test]
fn overwriting_a_record_replaces_it_atomically() {
    let dir = temp_dir("overwrite");
    let mut store = FsStore::open(&dir).expect("open store");

    let mut task = sample_task();
    store.save_one(&task).expect("save");

    task.name = "renamed".to_string();
    task.updated_at_ms = 2000;
    store.save_one(&task).expect("overwrite");

    let loaded = store.load_one("7").expect("load").expect("present");
    assert_eq!(loaded.name, "renamed");
    assert_eq!(loaded.updated_at_ms, 2000);

    // No staging leftovers remain next to the record.
    let leftovers: Vec<_> = std::fs::read_dir(&dir)
        .expect("read dir")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}
