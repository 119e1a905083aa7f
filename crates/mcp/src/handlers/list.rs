#![forbid(unsafe_code)]

use crate::McpServer;
use serde_json::Value;

pub(crate) fn list_tasks(server: &mut McpServer, args: Value) -> Value {
    let args_obj = match crate::args_object(&args) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let task_id = match crate::optional_str(args_obj, "taskId") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match task_id {
        Some(task_id) => match server.engine.task_detail(&task_id) {
            Ok(detail) => crate::ai_text("listTasks", crate::render::render_detail(&detail)),
            Err(err) => crate::engine_error_response(&err),
        },
        None => match server.engine.list_all() {
            Ok(summaries) => crate::ai_text("listTasks", crate::render::render_all(&summaries)),
            Err(err) => crate::engine_error_response(&err),
        },
    }
}
