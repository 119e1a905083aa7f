#![forbid(unsafe_code)]

mod engine;
mod error;
mod requests;

pub use engine::TaskEngine;
pub use error::{EngineError, StoreError};
pub use requests::*;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tm_core::model::Task;

const TASK_FILE_PREFIX: &str = "task-";
const TASK_FILE_SUFFIX: &str = ".json";

/// Persistence contract the engine depends on. One record per task, keyed
/// by the task's own id; `save_one` must either fully succeed or leave the
/// record unmodified.
pub trait TaskStore {
    fn load_one(&self, id: &str) -> Result<Option<Task>, StoreError>;
    fn load_all(&self) -> Result<BTreeMap<String, Task>, StoreError>;
    fn save_one(&mut self, task: &Task) -> Result<(), StoreError>;
}

/// Filesystem store: one pretty-printed JSON file per task
/// (`task-<id>.json`) under the storage directory.
#[derive(Debug)]
pub struct FsStore {
    storage_dir: PathBuf,
}

impl FsStore {
    pub fn open(storage_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let storage_dir = storage_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&storage_dir)?;
        Ok(Self { storage_dir })
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    fn task_path(&self, id: &str) -> PathBuf {
        self.storage_dir
            .join(format!("{TASK_FILE_PREFIX}{id}{TASK_FILE_SUFFIX}"))
    }
}

impl TaskStore for FsStore {
    fn load_one(&self, id: &str) -> Result<Option<Task>, StoreError> {
        let path = self.task_path(id);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::Io(err)),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn load_all(&self) -> Result<BTreeMap<String, Task>, StoreError> {
        let mut tasks = BTreeMap::new();
        for entry in std::fs::read_dir(&self.storage_dir)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            let Some(id) = file_name
                .strip_prefix(TASK_FILE_PREFIX)
                .and_then(|rest| rest.strip_suffix(TASK_FILE_SUFFIX))
            else {
                continue;
            };
            if id.is_empty() {
                continue;
            }
            if let Some(task) = self.load_one(id)? {
                tasks.insert(task.id.clone(), task);
            }
        }
        Ok(tasks)
    }

    fn save_one(&mut self, task: &Task) -> Result<(), StoreError> {
        if task.id.trim().is_empty() {
            return Err(StoreError::InvalidRecord("task id must not be empty"));
        }
        let body = serde_json::to_vec_pretty(task)?;

        // A single record must never be half-written: stage to a sibling
        // temp file (which the directory scan ignores) and rename over the
        // target.
        let tmp = self
            .storage_dir
            .join(format!("{TASK_FILE_PREFIX}{}.tmp", task.id));
        std::fs::write(&tmp, &body)?;
        std::fs::rename(&tmp, self.task_path(&task.id))?;
        Ok(())
    }
}

pub(crate) fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(duration) => duration,
        Err(_) => return 0,
    };

    i64::try_from(now.as_millis()).unwrap_or(i64::MAX)
}
