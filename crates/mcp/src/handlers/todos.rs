#![forbid(unsafe_code)]

use crate::McpServer;
use serde_json::{Value, json};
use tm_storage::BulkOutcome;

pub(crate) fn add_todo(server: &mut McpServer, args: Value) -> Value {
    let args_obj = match crate::args_object(&args) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let task_id = match crate::require_str(args_obj, "taskId") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let text = match crate::require_str(args_obj, "text") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match server.engine.add_todo(task_id, text) {
        Ok(message) => crate::ai_ok("addTodo", json!({ "message": message })),
        Err(err) => crate::engine_error_response(&err),
    }
}

pub(crate) fn add_todos_bulk(server: &mut McpServer, args: Value) -> Value {
    let args_obj = match crate::args_object(&args) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let task_id = match crate::require_str(args_obj, "taskId") {
        Ok(v) => v.to_string(),
        Err(resp) => return resp,
    };
    let texts = match crate::require_string_array(args_obj, "todoTexts") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match server.engine.add_todos_bulk(&task_id, texts) {
        Ok(outcome) => bulk_outcome_response("addTodosBulk", &outcome),
        Err(err) => crate::engine_error_response(&err),
    }
}

pub(crate) fn toggle_todo(server: &mut McpServer, args: Value) -> Value {
    let args_obj = match crate::args_object(&args) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let task_id = match crate::require_str(args_obj, "taskId") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let todo_id = match crate::require_str(args_obj, "todoId") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match server.engine.toggle_todo(task_id, todo_id) {
        Ok(message) => crate::ai_ok("toggleTodo", json!({ "message": message })),
        Err(err) => crate::engine_error_response(&err),
    }
}

pub(crate) fn toggle_todos_bulk(server: &mut McpServer, args: Value) -> Value {
    let args_obj = match crate::args_object(&args) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let task_id = match crate::require_str(args_obj, "taskId") {
        Ok(v) => v.to_string(),
        Err(resp) => return resp,
    };
    let todo_ids = match crate::require_string_array(args_obj, "todoIds") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match server.engine.toggle_todos_bulk(&task_id, todo_ids) {
        Ok(outcome) => bulk_outcome_response("toggleTodosBulk", &outcome),
        Err(err) => crate::engine_error_response(&err),
    }
}

pub(crate) fn bulk_outcome_response(intent: &str, outcome: &BulkOutcome) -> Value {
    crate::ai_ok(
        intent,
        json!({
            "successes": outcome.successes,
            "errors": outcome.errors
        }),
    )
}
