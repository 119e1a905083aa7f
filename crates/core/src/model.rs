#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Task lifecycle state. Any valid status may replace any other; there is
/// no terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    New,
    Blocked,
    InProgress,
    Finished,
}

impl TaskStatus {
    pub const LABELS: [&'static str; 4] = ["new", "blocked", "in_progress", "finished"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "new" => Some(Self::New),
            "blocked" => Some(Self::Blocked),
            "in_progress" => Some(Self::InProgress),
            "finished" => Some(Self::Finished),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Blocked => "blocked",
            Self::InProgress => "in_progress",
            Self::Finished => "finished",
        }
    }
}

/// Checklist entry owned by exactly one task.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub done: bool,
    pub created_at_ms: i64,
}

/// Free-text annotation owned by exactly one task.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub text: String,
    /// Serialized as `type` to match the persisted record schema.
    #[serde(rename = "type")]
    pub note_type: String,
    pub created_at_ms: i64,
}

/// One node of the task forest. `parent_id = None` means root; the parent
/// relation must stay acyclic, which only the link operation may extend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub parent_id: Option<String>,
    pub status: TaskStatus,
    #[serde(default)]
    pub todos: BTreeMap<String, Todo>,
    #[serde(default)]
    pub notes: BTreeMap<String, Note>,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

impl Task {
    /// Fresh task with empty sub-collections and both timestamps set to the
    /// same instant.
    pub fn new(id: String, name: String, parent_id: Option<String>, now_ms: i64) -> Self {
        Self {
            id,
            name,
            parent_id,
            status: TaskStatus::New,
            todos: BTreeMap::new(),
            notes: BTreeMap::new(),
            created_at_ms: now_ms,
            updated_at_ms: now_ms,
        }
    }
}
