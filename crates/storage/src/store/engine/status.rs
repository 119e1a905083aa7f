#![forbid(unsafe_code)]

use super::TaskEngine;
use crate::store::{EngineError, TaskStore, now_ms};
use tm_core::model::TaskStatus;

impl<S: TaskStore> TaskEngine<S> {
    /// Statuses form no transition graph: any valid value may replace any
    /// other. An unrecognized value is rejected before anything is loaded
    /// or stored.
    pub fn set_status(&mut self, task_id: &str, status: &str) -> Result<String, EngineError> {
        let Some(parsed) = TaskStatus::parse(status) else {
            return Err(EngineError::InvalidStatus {
                status: status.to_string(),
            });
        };

        let mut tasks = self.working_set()?;
        let Some(task) = tasks.get_mut(task_id) else {
            return Err(EngineError::TaskNotFound {
                id: task_id.to_string(),
            });
        };

        task.status = parsed;
        task.updated_at_ms = now_ms();
        self.store.save_one(task)?;

        Ok(format!(
            "Status of task {task_id} set to '{}'.",
            parsed.as_str()
        ))
    }
}
