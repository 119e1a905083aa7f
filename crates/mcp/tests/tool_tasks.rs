#![forbid(unsafe_code)]

mod support;
use support::*;

use serde_json::json;

#[test]
fn add_task_assigns_ids_and_persists_record_files() {
    let mut server = Server::start_initialized("add_task_basics");

    let payload = server.call_tool(10, "addTask", json!({ "name": "Build the thing" }));
    assert_eq!(payload.get("success").and_then(|v| v.as_bool()), Some(true));
    let result = payload.get("result").expect("result");
    assert_eq!(result.get("task_id").and_then(|v| v.as_str()), Some("1"));
    assert_eq!(
        result.get("message").and_then(|v| v.as_str()),
        Some("Task 'Build the thing' (ID: 1) created.")
    );

    assert!(server.storage_dir().join("task-1.json").is_file());

    let payload = server.call_tool(11, "addTask", json!({ "name": "child", "parentId": "1" }));
    assert_eq!(
        payload
            .get("result")
            .and_then(|v| v.get("task_id"))
            .and_then(|v| v.as_str()),
        Some("2")
    );
}

#[test]
fn add_task_rejects_missing_parents_with_not_found() {
    let mut server = Server::start_initialized("add_task_missing_parent");

    let payload = server.call_tool(10, "addTask", json!({ "name": "orphan", "parentId": "99" }));
    assert_eq!(payload.get("success").and_then(|v| v.as_bool()), Some(false));
    assert_eq!(error_code(&payload), Some("NOT_FOUND"));
    assert!(!server.storage_dir().join("task-1.json").exists());
}

#[test]
fn add_tasks_bulk_reports_each_definition_in_order() {
    let mut server = Server::start_initialized("add_tasks_bulk");

    let payload = server.call_tool(
        10,
        "addTasksBulk",
        json!({
            "taskDefs": [
                { "name": "root" },
                { "name": "orphan", "parentId": "42" },
                { "name": "child", "parentId": "1" }
            ]
        }),
    );
    assert_eq!(payload.get("success").and_then(|v| v.as_bool()), Some(true));
    let results = payload
        .get("result")
        .and_then(|v| v.get("results"))
        .and_then(|v| v.as_array())
        .expect("results array");
    assert_eq!(results.len(), 3);
    assert_eq!(
        results[0].get("task_id").and_then(|v| v.as_str()),
        Some("1")
    );
    assert!(
        results[1]
            .get("error")
            .and_then(|v| v.as_str())
            .expect("error entry")
            .contains("Parent task ID 42 not found")
    );
    assert_eq!(
        results[2].get("task_id").and_then(|v| v.as_str()),
        Some("2")
    );
}

#[test]
fn linking_rejects_cycles_and_missing_parents() {
    let mut server = Server::start_initialized("link_cycle_scenario");

    // Task A (id 1), task B under A (id 2).
    server.call_tool(10, "addTask", json!({ "name": "A" }));
    server.call_tool(11, "addTask", json!({ "name": "B", "parentId": "1" }));

    let payload = server.call_tool(12, "linkTask", json!({ "taskId": "2", "parentId": "99" }));
    assert_eq!(error_code(&payload), Some("NOT_FOUND"));

    // A under its own child closes a loop.
    let payload = server.call_tool(13, "linkTask", json!({ "taskId": "1", "parentId": "2" }));
    assert_eq!(error_code(&payload), Some("CYCLE"));

    let payload = server.call_tool(14, "linkTask", json!({ "taskId": "1", "parentId": "1" }));
    assert_eq!(error_code(&payload), Some("INVALID_INPUT"));
}

#[test]
fn link_tasks_bulk_mixes_messages_and_errors_in_order() {
    let mut server = Server::start_initialized("link_bulk_order");

    server.call_tool(10, "addTask", json!({ "name": "A" }));
    server.call_tool(11, "addTask", json!({ "name": "B" }));

    let payload = server.call_tool(
        12,
        "linkTasksBulk",
        json!({
            "links": [
                { "taskId": "2", "parentId": "1" },
                { "taskId": "1", "parentId": "2" }
            ]
        }),
    );
    let results = payload
        .get("result")
        .and_then(|v| v.get("results"))
        .and_then(|v| v.as_array())
        .expect("results array");
    assert_eq!(
        results[0].get("message").and_then(|v| v.as_str()),
        Some("Task 2 linked to parent task 1.")
    );
    assert!(
        results[1]
            .get("error")
            .and_then(|v| v.as_str())
            .expect("error entry")
            .contains("Circular dependency")
    );
}

#[test]
fn list_tasks_renders_summaries_and_details() {
    let mut server = Server::start_initialized("list_tasks_render");

    server.call_tool(10, "addTask", json!({ "name": "root" }));
    server.call_tool(11, "addTask", json!({ "name": "leaf", "parentId": "1" }));
    server.call_tool(12, "addTodo", json!({ "taskId": "1", "text": "open item" }));

    let payload = server.call_tool(13, "listTasks", json!({}));
    let rendered = payload.as_str().expect("rendered listing text");
    assert!(rendered.starts_with("Tasks (Summary):"));
    assert!(rendered.contains("- ID: 1, Name: root, Status: new"));
    assert!(rendered.contains("     - ID: 2 - \"leaf\" (Status: new)"));
    assert!(rendered.contains("   Todo Summary: Open: 1, Done: 0 (Total: 1)"));

    let payload = server.call_tool(14, "listTasks", json!({ "taskId": "1" }));
    let rendered = payload.as_str().expect("rendered detail text");
    assert!(rendered.contains("   Parent: None"));
    assert!(rendered.contains("   Detailed Todos:"));
    assert!(rendered.contains("[✗] (ID: 1) open item"));

    let payload = server.call_tool(15, "listTasks", json!({ "taskId": "77" }));
    assert_eq!(error_code(&payload), Some("NOT_FOUND"));
}

#[test]
fn listing_an_empty_collection_says_so() {
    let mut server = Server::start_initialized("list_empty");

    let payload = server.call_tool(10, "listTasks", json!({}));
    assert_eq!(payload.as_str(), Some("No tasks found."));
}

#[test]
fn invalid_arguments_are_reported_as_typed_errors() {
    let mut server = Server::start_initialized("invalid_args");

    let payload = server.call_tool(10, "addTask", json!({}));
    assert_eq!(error_code(&payload), Some("INVALID_INPUT"));

    let payload = server.call_tool(11, "addTasksBulk", json!({ "taskDefs": "nope" }));
    assert_eq!(error_code(&payload), Some("INVALID_INPUT"));

    let payload = server.call_tool(12, "linkTask", json!({ "taskId": "1" }));
    assert_eq!(error_code(&payload), Some("INVALID_INPUT"));
}
