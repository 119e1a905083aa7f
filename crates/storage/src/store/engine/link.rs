#![forbid(unsafe_code)]

use super::TaskEngine;
use crate::store::{EngineError, LinkDef, TaskStore, now_ms};
use std::collections::BTreeMap;
use tm_core::model::Task;

impl<S: TaskStore> TaskEngine<S> {
    pub fn link(&mut self, def: LinkDef) -> Result<String, EngineError> {
        let mut tasks = self.working_set()?;
        self.link_in(&mut tasks, def)
    }

    /// Pairs are applied independently in order. A rejected pair does not
    /// stop later pairs, and a link applied earlier in the batch is visible
    /// to later cycle checks.
    pub fn link_bulk(
        &mut self,
        links: Vec<LinkDef>,
    ) -> Result<Vec<Result<String, EngineError>>, EngineError> {
        let mut tasks = self.working_set()?;
        Ok(links
            .into_iter()
            .map(|def| self.link_in(&mut tasks, def))
            .collect())
    }

    fn link_in(
        &mut self,
        tasks: &mut BTreeMap<String, Task>,
        def: LinkDef,
    ) -> Result<String, EngineError> {
        let LinkDef { task_id, parent_id } = def;

        if !tasks.contains_key(&task_id) {
            return Err(EngineError::TaskNotFound { id: task_id });
        }
        if !tasks.contains_key(&parent_id) {
            return Err(EngineError::ParentNotFound { id: parent_id });
        }
        if task_id == parent_id {
            return Err(EngineError::SelfLink { id: task_id });
        }

        check_ancestry(tasks, &task_id, &parent_id)?;

        let now = now_ms();
        if let Some(child) = tasks.get_mut(&task_id) {
            child.parent_id = Some(parent_id.clone());
            child.updated_at_ms = now;
            self.store.save_one(child)?;
        }
        // The parent's own fields are unchanged, but its child set is not:
        // touch it so readers of the parent record observe the change.
        if let Some(parent) = tasks.get_mut(&parent_id) {
            parent.updated_at_ms = now;
            self.store.save_one(parent)?;
        }

        Ok(format!("Task {task_id} linked to parent task {parent_id}."))
    }
}

/// Walk the ancestor chain of the proposed parent. Meeting `task_id` means
/// the link would close a cycle. Revisiting an id before reaching a root
/// means storage already holds a cycle; a named ancestor without a record
/// means the chain is broken. Both reject the link without modifying
/// anything.
fn check_ancestry(
    tasks: &BTreeMap<String, Task>,
    task_id: &str,
    parent_id: &str,
) -> Result<(), EngineError> {
    let mut visited: std::collections::BTreeSet<&str> = std::collections::BTreeSet::new();
    let mut ancestor = tasks.get(parent_id);

    while let Some(current) = ancestor {
        if current.id == task_id {
            return Err(EngineError::Cycle {
                task_id: task_id.to_string(),
                parent_id: parent_id.to_string(),
            });
        }
        if !visited.insert(current.id.as_str()) {
            return Err(EngineError::AncestryCorrupt {
                parent_id: parent_id.to_string(),
                ancestor_id: current.id.clone(),
            });
        }

        let Some(next_id) = current.parent_id.as_deref() else {
            break;
        };
        let Some(next) = tasks.get(next_id) else {
            return Err(EngineError::AncestryBroken {
                parent_id: parent_id.to_string(),
                missing_id: next_id.to_string(),
            });
        };
        ancestor = Some(next);
    }

    Ok(())
}
