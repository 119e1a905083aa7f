#![forbid(unsafe_code)]

use super::TaskEngine;
use crate::store::{BulkOutcome, EngineError, NoteDef, TaskStore, now_ms};
use tm_core::ids::next_id;
use tm_core::model::Note;

impl<S: TaskStore> TaskEngine<S> {
    pub fn add_note(&mut self, task_id: &str, def: NoteDef) -> Result<String, EngineError> {
        let mut tasks = self.working_set()?;
        let Some(task) = tasks.get_mut(task_id) else {
            return Err(EngineError::TaskNotFound {
                id: task_id.to_string(),
            });
        };

        let NoteDef { text, note_type } = def;
        let now = now_ms();
        let note_id = next_id(task.notes.keys().map(String::as_str));
        task.notes.insert(
            note_id.clone(),
            Note {
                id: note_id.clone(),
                text,
                note_type: note_type.clone(),
                created_at_ms: now,
            },
        );
        task.updated_at_ms = now;
        self.store.save_one(task)?;

        Ok(format!(
            "Note (ID: {note_id}, Type: {note_type}) added to task {task_id}."
        ))
    }

    /// Same contract as the todo batch: one persist at the end, no partial
    /// failure once the task exists.
    pub fn add_notes_bulk(
        &mut self,
        task_id: &str,
        defs: Vec<NoteDef>,
    ) -> Result<BulkOutcome, EngineError> {
        let mut tasks = self.working_set()?;
        let Some(task) = tasks.get_mut(task_id) else {
            return Err(EngineError::TaskNotFound {
                id: task_id.to_string(),
            });
        };

        let mut outcome = BulkOutcome::default();
        if defs.is_empty() {
            return Ok(outcome);
        }

        let now = now_ms();
        for def in defs {
            let NoteDef { text, note_type } = def;
            let note_id = next_id(task.notes.keys().map(String::as_str));
            task.notes.insert(
                note_id.clone(),
                Note {
                    id: note_id.clone(),
                    text,
                    note_type: note_type.clone(),
                    created_at_ms: now,
                },
            );
            outcome.successes.push(format!(
                "Note (ID: {note_id}, Type: {note_type}) added to task {task_id}."
            ));
        }

        task.updated_at_ms = now;
        self.store.save_one(task)?;
        Ok(outcome)
    }
}
