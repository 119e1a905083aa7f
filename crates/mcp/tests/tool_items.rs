#![forbid(unsafe_code)]

mod support;
use support::*;

use serde_json::json;

fn seeded(test_name: &str) -> Server {
    let mut server = Server::start_initialized(test_name);
    let payload = server.call_tool(1, "addTask", json!({ "name": "seed" }));
    assert_eq!(payload.get("success").and_then(|v| v.as_bool()), Some(true));
    server
}

#[test]
fn todos_are_added_and_toggled_through_the_tool_surface() {
    let mut server = seeded("todo_roundtrip");

    let payload = server.call_tool(10, "addTodo", json!({ "taskId": "1", "text": "write it" }));
    assert_eq!(
        result_message(&payload),
        Some("Todo 'write it' (ID: 1) added to task 1.")
    );

    let payload = server.call_tool(11, "toggleTodo", json!({ "taskId": "1", "todoId": "1" }));
    assert_eq!(
        result_message(&payload),
        Some("Todo 1 in task 1 marked as done.")
    );

    let payload = server.call_tool(12, "toggleTodo", json!({ "taskId": "1", "todoId": "1" }));
    assert_eq!(
        result_message(&payload),
        Some("Todo 1 in task 1 marked as not done.")
    );

    let payload = server.call_tool(13, "toggleTodo", json!({ "taskId": "1", "todoId": "9" }));
    assert_eq!(error_code(&payload), Some("NOT_FOUND"));
}

#[test]
fn add_todos_bulk_returns_ordered_successes() {
    let mut server = seeded("todos_bulk");

    let payload = server.call_tool(
        10,
        "addTodosBulk",
        json!({ "taskId": "1", "todoTexts": ["x", "y", "z"] }),
    );
    assert_eq!(payload.get("success").and_then(|v| v.as_bool()), Some(true));
    let successes = payload
        .get("result")
        .and_then(|v| v.get("successes"))
        .and_then(|v| v.as_array())
        .expect("successes");
    assert_eq!(successes.len(), 3);
    assert!(
        successes[0]
            .as_str()
            .expect("success line")
            .contains("'x' (ID: 1)")
    );
    assert!(
        successes[2]
            .as_str()
            .expect("success line")
            .contains("'z' (ID: 3)")
    );
    assert_eq!(
        payload
            .get("result")
            .and_then(|v| v.get("errors"))
            .and_then(|v| v.as_array())
            .map(Vec::len),
        Some(0)
    );
}

#[test]
fn add_todos_bulk_against_a_missing_task_aborts_whole_batch() {
    let mut server = seeded("todos_bulk_missing_task");

    let payload = server.call_tool(
        10,
        "addTodosBulk",
        json!({ "taskId": "42", "todoTexts": ["x"] }),
    );
    assert_eq!(payload.get("success").and_then(|v| v.as_bool()), Some(false));
    assert_eq!(error_code(&payload), Some("NOT_FOUND"));
}

#[test]
fn toggle_todos_bulk_isolates_per_id_failures() {
    let mut server = seeded("toggle_bulk_mixed");
    server.call_tool(10, "addTodo", json!({ "taskId": "1", "text": "only" }));

    let payload = server.call_tool(
        11,
        "toggleTodosBulk",
        json!({ "taskId": "1", "todoIds": ["1", "9"] }),
    );
    let result = payload.get("result").expect("result");
    let successes = result
        .get("successes")
        .and_then(|v| v.as_array())
        .expect("successes");
    let errors = result
        .get("errors")
        .and_then(|v| v.as_array())
        .expect("errors");
    assert_eq!(successes.len(), 1);
    assert_eq!(errors.len(), 1);
    assert!(
        errors[0]
            .as_str()
            .expect("error line")
            .contains("Todo ID 9 not found in task 1.")
    );
}

#[test]
fn notes_default_their_type_and_render_through_get_notes() {
    let mut server = seeded("notes_defaults");

    let payload = server.call_tool(
        10,
        "addNote",
        json!({ "taskId": "1", "noteText": "remember" }),
    );
    assert_eq!(
        result_message(&payload),
        Some("Note (ID: 1, Type: general) added to task 1.")
    );

    let payload = server.call_tool(
        11,
        "addNotesBulk",
        json!({
            "taskId": "1",
            "noteDefs": [
                { "text": "decided", "type": "decision" },
                { "text": "untyped" }
            ]
        }),
    );
    let successes = payload
        .get("result")
        .and_then(|v| v.get("successes"))
        .and_then(|v| v.as_array())
        .expect("successes");
    assert!(
        successes[0]
            .as_str()
            .expect("success line")
            .contains("Type: decision")
    );
    assert!(
        successes[1]
            .as_str()
            .expect("success line")
            .contains("Type: general")
    );

    let payload = server.call_tool(12, "getNotes", json!({ "taskId": "1" }));
    let rendered = payload.as_str().expect("rendered notes text");
    assert!(rendered.starts_with("Notes for Task 1 (\"seed\"):"));
    assert!(rendered.contains("(ID: 2) [decision] decided"));

    let payload = server.call_tool(13, "getNotes", json!({ "taskId": "5" }));
    assert_eq!(error_code(&payload), Some("NOT_FOUND"));
}

#[test]
fn get_notes_on_a_noteless_task_renders_an_empty_marker() {
    let mut server = seeded("notes_empty");

    let payload = server.call_tool(10, "getNotes", json!({ "taskId": "1" }));
    assert_eq!(payload.as_str(), Some("No notes for task 1 (\"seed\")."));
}

#[test]
fn set_status_validates_and_applies() {
    let mut server = seeded("set_status");

    let payload = server.call_tool(
        10,
        "setStatus",
        json!({ "taskId": "1", "status": "in_progress" }),
    );
    assert_eq!(
        result_message(&payload),
        Some("Status of task 1 set to 'in_progress'.")
    );

    let payload = server.call_tool(11, "setStatus", json!({ "taskId": "1", "status": "done" }));
    assert_eq!(error_code(&payload), Some("INVALID_INPUT"));

    let payload = server.call_tool(
        12,
        "setStatus",
        json!({ "taskId": "9", "status": "finished" }),
    );
    assert_eq!(error_code(&payload), Some("NOT_FOUND"));

    // The rejected value never reached the record.
    let payload = server.call_tool(13, "listTasks", json!({ "taskId": "1" }));
    let rendered = payload.as_str().expect("rendered detail");
    assert!(rendered.contains("Status: in_progress"));
}
