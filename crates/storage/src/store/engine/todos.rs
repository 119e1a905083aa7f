#![forbid(unsafe_code)]

use super::TaskEngine;
use crate::store::{BulkOutcome, EngineError, TaskStore, now_ms};
use tm_core::ids::next_id;
use tm_core::model::Todo;

impl<S: TaskStore> TaskEngine<S> {
    pub fn add_todo(&mut self, task_id: &str, text: &str) -> Result<String, EngineError> {
        let mut tasks = self.working_set()?;
        let Some(task) = tasks.get_mut(task_id) else {
            return Err(EngineError::TaskNotFound {
                id: task_id.to_string(),
            });
        };

        let now = now_ms();
        let todo_id = next_id(task.todos.keys().map(String::as_str));
        task.todos.insert(
            todo_id.clone(),
            Todo {
                id: todo_id.clone(),
                text: text.to_string(),
                done: false,
                created_at_ms: now,
            },
        );
        task.updated_at_ms = now;
        self.store.save_one(task)?;

        Ok(format!("Todo '{text}' (ID: {todo_id}) added to task {task_id}."))
    }

    /// All items land on the same in-memory task and the record is
    /// persisted exactly once at the end; once the task is confirmed to
    /// exist the batch cannot partially fail.
    pub fn add_todos_bulk(
        &mut self,
        task_id: &str,
        texts: Vec<String>,
    ) -> Result<BulkOutcome, EngineError> {
        let mut tasks = self.working_set()?;
        let Some(task) = tasks.get_mut(task_id) else {
            return Err(EngineError::TaskNotFound {
                id: task_id.to_string(),
            });
        };

        let mut outcome = BulkOutcome::default();
        if texts.is_empty() {
            return Ok(outcome);
        }

        let now = now_ms();
        for text in texts {
            let todo_id = next_id(task.todos.keys().map(String::as_str));
            task.todos.insert(
                todo_id.clone(),
                Todo {
                    id: todo_id.clone(),
                    text: text.clone(),
                    done: false,
                    created_at_ms: now,
                },
            );
            outcome
                .successes
                .push(format!("Todo '{text}' (ID: {todo_id}) added to task {task_id}."));
        }

        task.updated_at_ms = now;
        self.store.save_one(task)?;
        Ok(outcome)
    }

    pub fn toggle_todo(&mut self, task_id: &str, todo_id: &str) -> Result<String, EngineError> {
        let mut tasks = self.working_set()?;
        let Some(task) = tasks.get_mut(task_id) else {
            return Err(EngineError::TaskNotFound {
                id: task_id.to_string(),
            });
        };
        let Some(todo) = task.todos.get_mut(todo_id) else {
            return Err(EngineError::TodoNotFound {
                task_id: task_id.to_string(),
                id: todo_id.to_string(),
            });
        };

        todo.done = !todo.done;
        let state = if todo.done { "done" } else { "not done" };
        let message = format!("Todo {todo_id} in task {task_id} marked as {state}.");

        task.updated_at_ms = now_ms();
        self.store.save_one(task)?;
        Ok(message)
    }

    /// Missing ids are collected as errors without stopping the batch; the
    /// record is persisted once at the end iff at least one toggle landed.
    pub fn toggle_todos_bulk(
        &mut self,
        task_id: &str,
        todo_ids: Vec<String>,
    ) -> Result<BulkOutcome, EngineError> {
        let mut tasks = self.working_set()?;
        let Some(task) = tasks.get_mut(task_id) else {
            return Err(EngineError::TaskNotFound {
                id: task_id.to_string(),
            });
        };

        let mut outcome = BulkOutcome::default();
        let mut touched = false;

        for todo_id in todo_ids {
            match task.todos.get_mut(&todo_id) {
                Some(todo) => {
                    todo.done = !todo.done;
                    let state = if todo.done { "done" } else { "not done" };
                    outcome
                        .successes
                        .push(format!("Todo {todo_id} in task {task_id} marked as {state}."));
                    touched = true;
                }
                None => outcome
                    .errors
                    .push(format!("Todo ID {todo_id} not found in task {task_id}.")),
            }
        }

        if touched {
            task.updated_at_ms = now_ms();
            self.store.save_one(task)?;
        }
        Ok(outcome)
    }
}
