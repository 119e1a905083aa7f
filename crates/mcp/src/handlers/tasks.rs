#![forbid(unsafe_code)]

use crate::McpServer;
use serde_json::{Value, json};
use tm_storage::{LinkDef, TaskDef};

pub(crate) fn add_task(server: &mut McpServer, args: Value) -> Value {
    let args_obj = match crate::args_object(&args) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let name = match crate::require_str(args_obj, "name") {
        Ok(v) => v.to_string(),
        Err(resp) => return resp,
    };
    let parent_id = match crate::optional_str(args_obj, "parentId") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match server.engine.create(TaskDef { name, parent_id }) {
        Ok(created) => crate::ai_ok(
            "addTask",
            json!({ "task_id": created.task_id, "message": created.message }),
        ),
        Err(err) => crate::engine_error_response(&err),
    }
}

pub(crate) fn add_tasks_bulk(server: &mut McpServer, args: Value) -> Value {
    let args_obj = match crate::args_object(&args) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let raw_defs = match crate::require_array(args_obj, "taskDefs") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let mut defs = Vec::with_capacity(raw_defs.len());
    for raw in raw_defs {
        let Some(def_obj) = raw.as_object() else {
            return crate::ai_error("INVALID_INPUT", "taskDefs entries must be objects");
        };
        let name = match crate::require_str(def_obj, "name") {
            Ok(v) => v.to_string(),
            Err(resp) => return resp,
        };
        let parent_id = match crate::optional_str(def_obj, "parentId") {
            Ok(v) => v,
            Err(resp) => return resp,
        };
        defs.push(TaskDef { name, parent_id });
    }

    match server.engine.create_bulk(defs) {
        Ok(results) => {
            let results: Vec<Value> = results
                .iter()
                .map(|result| match result {
                    Ok(created) => json!({
                        "task_id": created.task_id,
                        "message": created.message
                    }),
                    Err(err) => json!({ "error": crate::format_engine_error(err) }),
                })
                .collect();
            crate::ai_ok("addTasksBulk", json!({ "results": results }))
        }
        Err(err) => crate::engine_error_response(&err),
    }
}

pub(crate) fn link_task(server: &mut McpServer, args: Value) -> Value {
    let args_obj = match crate::args_object(&args) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let task_id = match crate::require_str(args_obj, "taskId") {
        Ok(v) => v.to_string(),
        Err(resp) => return resp,
    };
    let parent_id = match crate::require_str(args_obj, "parentId") {
        Ok(v) => v.to_string(),
        Err(resp) => return resp,
    };

    match server.engine.link(LinkDef { task_id, parent_id }) {
        Ok(message) => crate::ai_ok("linkTask", json!({ "message": message })),
        Err(err) => crate::engine_error_response(&err),
    }
}

pub(crate) fn link_tasks_bulk(server: &mut McpServer, args: Value) -> Value {
    let args_obj = match crate::args_object(&args) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let raw_links = match crate::require_array(args_obj, "links") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let mut links = Vec::with_capacity(raw_links.len());
    for raw in raw_links {
        let Some(link_obj) = raw.as_object() else {
            return crate::ai_error("INVALID_INPUT", "links entries must be objects");
        };
        let task_id = match crate::require_str(link_obj, "taskId") {
            Ok(v) => v.to_string(),
            Err(resp) => return resp,
        };
        let parent_id = match crate::require_str(link_obj, "parentId") {
            Ok(v) => v.to_string(),
            Err(resp) => return resp,
        };
        links.push(LinkDef { task_id, parent_id });
    }

    match server.engine.link_bulk(links) {
        Ok(results) => {
            let results: Vec<Value> = results
                .iter()
                .map(|result| match result {
                    Ok(message) => json!({ "message": message }),
                    Err(err) => json!({ "error": crate::format_engine_error(err) }),
                })
                .collect();
            crate::ai_ok("linkTasksBulk", json!({ "results": results }))
        }
        Err(err) => crate::engine_error_response(&err),
    }
}
