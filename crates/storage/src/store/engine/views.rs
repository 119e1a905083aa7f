#![forbid(unsafe_code)]

use super::{TaskEngine, creation_order, numeric_id_order};
use crate::store::{
    ChildRef, EngineError, NotesView, ParentRef, TaskDetail, TaskStore, TaskSummary,
};
use std::collections::BTreeMap;
use tm_core::model::{Note, Task, Todo};

impl<S: TaskStore> TaskEngine<S> {
    /// Summaries of the whole collection, creation time ascending.
    pub fn list_all(&self) -> Result<Vec<TaskSummary>, EngineError> {
        let tasks = self.working_set()?;
        let mut ordered: Vec<&Task> = tasks.values().collect();
        ordered.sort_by(|a, b| creation_order(a, b));
        Ok(ordered.iter().map(|task| summarize(task, &tasks)).collect())
    }

    pub fn task_detail(&self, task_id: &str) -> Result<TaskDetail, EngineError> {
        let tasks = self.working_set()?;
        let Some(task) = tasks.get(task_id) else {
            return Err(EngineError::TaskNotFound {
                id: task_id.to_string(),
            });
        };

        Ok(TaskDetail {
            summary: summarize(task, &tasks),
            todos: ordered_todos(task),
            notes: ordered_notes(task),
        })
    }

    pub fn notes_view(&self, task_id: &str) -> Result<NotesView, EngineError> {
        let tasks = self.working_set()?;
        let Some(task) = tasks.get(task_id) else {
            return Err(EngineError::TaskNotFound {
                id: task_id.to_string(),
            });
        };

        Ok(NotesView {
            task_id: task.id.clone(),
            task_name: task.name.clone(),
            notes: ordered_notes(task),
        })
    }
}

fn summarize(task: &Task, tasks: &BTreeMap<String, Task>) -> TaskSummary {
    let parent = match task.parent_id.as_deref() {
        None => ParentRef::None,
        Some(parent_id) => match tasks.get(parent_id) {
            Some(parent) => ParentRef::Found {
                id: parent.id.clone(),
                name: parent.name.clone(),
            },
            None => ParentRef::Missing {
                id: parent_id.to_string(),
            },
        },
    };

    let mut children: Vec<ChildRef> = tasks
        .values()
        .filter(|candidate| candidate.parent_id.as_deref() == Some(task.id.as_str()))
        .map(|child| ChildRef {
            id: child.id.clone(),
            name: child.name.clone(),
            status: child.status,
        })
        .collect();
    children.sort_by(|a, b| numeric_id_order(&a.id, &b.id));

    let done_todos = task.todos.values().filter(|todo| todo.done).count();

    TaskSummary {
        id: task.id.clone(),
        name: task.name.clone(),
        status: task.status,
        created_at_ms: task.created_at_ms,
        updated_at_ms: task.updated_at_ms,
        parent,
        children,
        open_todos: task.todos.len() - done_todos,
        done_todos,
        note_count: task.notes.len(),
    }
}

fn ordered_todos(task: &Task) -> Vec<Todo> {
    let mut todos: Vec<Todo> = task.todos.values().cloned().collect();
    todos.sort_by(|a, b| {
        a.created_at_ms
            .cmp(&b.created_at_ms)
            .then_with(|| numeric_id_order(&a.id, &b.id))
    });
    todos
}

fn ordered_notes(task: &Task) -> Vec<Note> {
    let mut notes: Vec<Note> = task.notes.values().cloned().collect();
    notes.sort_by(|a, b| {
        a.created_at_ms
            .cmp(&b.created_at_ms)
            .then_with(|| numeric_id_order(&a.id, &b.id))
    });
    notes
}
