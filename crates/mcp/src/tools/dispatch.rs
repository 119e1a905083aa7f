#![forbid(unsafe_code)]

use crate::McpServer;
use crate::handlers::{list, notes, status, tasks, todos};
use serde_json::Value;

pub(crate) fn dispatch_tool(server: &mut McpServer, name: &str, args: Value) -> Option<Value> {
    let resp = match name {
        "addTask" => tasks::add_task(server, args),
        "addTasksBulk" => tasks::add_tasks_bulk(server, args),
        "linkTask" => tasks::link_task(server, args),
        "linkTasksBulk" => tasks::link_tasks_bulk(server, args),
        "addTodo" => todos::add_todo(server, args),
        "addTodosBulk" => todos::add_todos_bulk(server, args),
        "toggleTodo" => todos::toggle_todo(server, args),
        "toggleTodosBulk" => todos::toggle_todos_bulk(server, args),
        "addNote" => notes::add_note(server, args),
        "addNotesBulk" => notes::add_notes_bulk(server, args),
        "setStatus" => status::set_status(server, args),
        "listTasks" => list::list_tasks(server, args),
        "getNotes" => notes::get_notes(server, args),
        _ => return None,
    };
    Some(resp)
}
