#![forbid(unsafe_code)]

use serde_json::{Value, json};
use tm_storage::EngineError;

pub(crate) fn format_engine_error(err: &EngineError) -> String {
    match err {
        EngineError::TaskNotFound { id } => format!("Task ID {id} not found."),
        EngineError::ParentNotFound { id } => format!("Parent task ID {id} not found."),
        EngineError::TodoNotFound { task_id, id } => {
            format!("Todo ID {id} not found in task {task_id}.")
        }
        EngineError::SelfLink { .. } => "Cannot link a task to itself.".to_string(),
        EngineError::InvalidStatus { status } => format!(
            "Invalid status '{status}'. Valid: {}.",
            tm_core::model::TaskStatus::LABELS.join(", ")
        ),
        EngineError::Cycle { task_id, parent_id } => format!(
            "Circular dependency detected: task {task_id} is an ancestor of {parent_id}. Cannot link."
        ),
        EngineError::AncestryCorrupt {
            parent_id,
            ancestor_id,
        } => format!(
            "Corrupted data: a circular dependency already exists in the ancestors of {parent_id} involving {ancestor_id}. Cannot link."
        ),
        EngineError::AncestryBroken {
            parent_id,
            missing_id,
        } => format!("Broken parent chain for {parent_id}: ancestor {missing_id} not found."),
        EngineError::Store(err) => format!("Storage failure: {err}"),
    }
}

pub(crate) fn engine_error_code(err: &EngineError) -> &'static str {
    match err {
        EngineError::TaskNotFound { .. }
        | EngineError::ParentNotFound { .. }
        | EngineError::TodoNotFound { .. } => "NOT_FOUND",
        EngineError::SelfLink { .. } | EngineError::InvalidStatus { .. } => "INVALID_INPUT",
        EngineError::Cycle { .. } => "CYCLE",
        EngineError::AncestryCorrupt { .. } | EngineError::AncestryBroken { .. } => "CORRUPTION",
        EngineError::Store(_) => "STORE_ERROR",
    }
}

pub(crate) fn engine_error_response(err: &EngineError) -> Value {
    ai_error(engine_error_code(err), &format_engine_error(err))
}

pub(crate) fn ai_ok(intent: &str, result: Value) -> Value {
    json!({
        "success": true,
        "intent": intent,
        "result": result,
        "warnings": [],
        "error": null
    })
}

/// Success envelope whose result is pre-rendered text; the transport layer
/// unwraps it into raw text content.
pub(crate) fn ai_text(intent: &str, rendered: String) -> Value {
    json!({
        "success": true,
        "intent": intent,
        "result": rendered,
        "rendered": true,
        "warnings": [],
        "error": null
    })
}

pub(crate) fn ai_error(code: &str, message: &str) -> Value {
    json!({
        "success": false,
        "intent": "error",
        "result": {},
        "warnings": [],
        "error": { "code": code, "message": message.trim() }
    })
}
