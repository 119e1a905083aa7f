#![forbid(unsafe_code)]

use super::TaskEngine;
use crate::store::{EngineError, TaskCreated, TaskDef, TaskStore, now_ms};
use std::collections::BTreeMap;
use tm_core::ids::next_id;
use tm_core::model::Task;

impl<S: TaskStore> TaskEngine<S> {
    pub fn create(&mut self, def: TaskDef) -> Result<TaskCreated, EngineError> {
        let mut tasks = self.working_set()?;
        self.create_in(&mut tasks, def)
    }

    /// Each definition is independent: a rejected definition does not stop
    /// later ones, and a task created earlier in the batch can serve as a
    /// later definition's parent.
    pub fn create_bulk(
        &mut self,
        defs: Vec<TaskDef>,
    ) -> Result<Vec<Result<TaskCreated, EngineError>>, EngineError> {
        let mut tasks = self.working_set()?;
        Ok(defs
            .into_iter()
            .map(|def| self.create_in(&mut tasks, def))
            .collect())
    }

    fn create_in(
        &mut self,
        tasks: &mut BTreeMap<String, Task>,
        def: TaskDef,
    ) -> Result<TaskCreated, EngineError> {
        let TaskDef { name, parent_id } = def;

        if let Some(parent_id) = parent_id.as_deref()
            && !tasks.contains_key(parent_id)
        {
            return Err(EngineError::ParentNotFound {
                id: parent_id.to_string(),
            });
        }

        let id = next_id(tasks.keys().map(String::as_str));
        let task = Task::new(id.clone(), name.clone(), parent_id, now_ms());
        self.store.save_one(&task)?;
        tasks.insert(id.clone(), task);

        Ok(TaskCreated {
            message: format!("Task '{name}' (ID: {id}) created."),
            task_id: id,
        })
    }
}
