#![forbid(unsafe_code)]

use crate::McpServer;
use serde_json::{Value, json};

pub(crate) fn set_status(server: &mut McpServer, args: Value) -> Value {
    let args_obj = match crate::args_object(&args) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let task_id = match crate::require_str(args_obj, "taskId") {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let status = match crate::require_str(args_obj, "status") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match server.engine.set_status(task_id, status) {
        Ok(message) => crate::ai_ok("setStatus", json!({ "message": message })),
        Err(err) => crate::engine_error_response(&err),
    }
}
