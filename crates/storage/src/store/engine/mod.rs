#![forbid(unsafe_code)]

mod create;
mod link;
mod notes;
mod status;
mod todos;
mod views;

use super::{EngineError, TaskStore};
use std::collections::BTreeMap;
use tm_core::model::Task;

/// Stateless task engine over an injected store. Every operation rebuilds
/// the working set from storage, mutates it in memory, and persists only
/// the records it touched; nothing survives between calls.
pub struct TaskEngine<S: TaskStore> {
    store: S,
}

impl<S: TaskStore> TaskEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn working_set(&self) -> Result<BTreeMap<String, Task>, EngineError> {
        Ok(self.store.load_all()?)
    }
}

/// Listing order: creation time ascending, numeric id as tiebreak so
/// records created in one batch (sharing a timestamp) keep insertion
/// order.
pub(crate) fn creation_order(a: &Task, b: &Task) -> std::cmp::Ordering {
    a.created_at_ms
        .cmp(&b.created_at_ms)
        .then_with(|| numeric_id_order(&a.id, &b.id))
}

pub(crate) fn numeric_id_order(a: &str, b: &str) -> std::cmp::Ordering {
    use std::cmp::Ordering;

    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
