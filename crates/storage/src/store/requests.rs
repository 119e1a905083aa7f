#![forbid(unsafe_code)]

use tm_core::model::{Note, TaskStatus, Todo};

/// Fully-populated task definition. Optional-field defaulting happens at
/// the tool boundary, never here.
#[derive(Clone, Debug)]
pub struct TaskDef {
    pub name: String,
    pub parent_id: Option<String>,
}

#[derive(Clone, Debug)]
pub struct LinkDef {
    pub task_id: String,
    pub parent_id: String,
}

/// Note definition with the type already resolved (callers substitute
/// `"general"` for an omitted type before reaching the engine).
#[derive(Clone, Debug)]
pub struct NoteDef {
    pub text: String,
    pub note_type: String,
}

#[derive(Clone, Debug)]
pub struct TaskCreated {
    pub task_id: String,
    pub message: String,
}

/// Per-item outcomes of a batch that survived its batch-level
/// precondition. Order within each list follows input order.
#[derive(Clone, Debug, Default)]
pub struct BulkOutcome {
    pub successes: Vec<String>,
    pub errors: Vec<String>,
}

#[derive(Clone, Debug)]
pub enum ParentRef {
    None,
    Found { id: String, name: String },
    /// The record names a parent that is not present in storage.
    Missing { id: String },
}

#[derive(Clone, Debug)]
pub struct ChildRef {
    pub id: String,
    pub name: String,
    pub status: TaskStatus,
}

#[derive(Clone, Debug)]
pub struct TaskSummary {
    pub id: String,
    pub name: String,
    pub status: TaskStatus,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
    pub parent: ParentRef,
    pub children: Vec<ChildRef>,
    pub open_todos: usize,
    pub done_todos: usize,
    pub note_count: usize,
}

#[derive(Clone, Debug)]
pub struct TaskDetail {
    pub summary: TaskSummary,
    pub todos: Vec<Todo>,
    pub notes: Vec<Note>,
}

#[derive(Clone, Debug)]
pub struct NotesView {
    pub task_id: String,
    pub task_name: String,
    pub notes: Vec<Note>,
}
