#![forbid(unsafe_code)]

use serde_json::{Value, json};

pub(crate) fn tool_definitions() -> Vec<Value> {
    vec![
        json!({
            "name": "addTask",
            "description": "Adds a new task. Each task is saved in its own file.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Name of the task." },
                    "parentId": { "type": ["string", "null"], "description": "ID of the parent task, if any." }
                },
                "required": ["name"]
            }
        }),
        json!({
            "name": "addTasksBulk",
            "description": "Adds multiple tasks in bulk. Each task is saved individually.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "taskDefs": {
                        "type": "array",
                        "description": "Array of task definitions [{name, parentId}].",
                        "items": {
                            "type": "object",
                            "properties": {
                                "name": { "type": "string" },
                                "parentId": { "type": ["string", "null"] }
                            },
                            "required": ["name"]
                        }
                    }
                },
                "required": ["taskDefs"]
            }
        }),
        json!({
            "name": "linkTask",
            "description": "Links a task to a parent task. Saves both modified task files.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "taskId": { "type": "string", "description": "ID of the child task." },
                    "parentId": { "type": "string", "description": "ID of the parent task." }
                },
                "required": ["taskId", "parentId"]
            }
        }),
        json!({
            "name": "linkTasksBulk",
            "description": "Links multiple tasks to their respective parents. Saves affected task files.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "links": {
                        "type": "array",
                        "description": "Array of link definitions [{taskId, parentId}].",
                        "items": {
                            "type": "object",
                            "properties": {
                                "taskId": { "type": "string" },
                                "parentId": { "type": "string" }
                            },
                            "required": ["taskId", "parentId"]
                        }
                    }
                },
                "required": ["links"]
            }
        }),
        json!({
            "name": "addTodo",
            "description": "Adds a todo item to a specific task. Saves the modified task file.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "taskId": { "type": "string", "description": "ID of the task." },
                    "text": { "type": "string", "description": "Text content of the todo." }
                },
                "required": ["taskId", "text"]
            }
        }),
        json!({
            "name": "addTodosBulk",
            "description": "Adds multiple todos to a specific task. Saves the modified task file once.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "taskId": { "type": "string", "description": "ID of the task." },
                    "todoTexts": { "type": "array", "items": { "type": "string" }, "description": "Array of todo texts." }
                },
                "required": ["taskId", "todoTexts"]
            }
        }),
        json!({
            "name": "toggleTodo",
            "description": "Toggles the done status of a todo item. Saves the modified task file.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "taskId": { "type": "string", "description": "ID of the task." },
                    "todoId": { "type": "string", "description": "ID of the todo item." }
                },
                "required": ["taskId", "todoId"]
            }
        }),
        json!({
            "name": "toggleTodosBulk",
            "description": "Toggles the done status of multiple todos for a task. Saves the modified task file once.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "taskId": { "type": "string", "description": "ID of the task." },
                    "todoIds": { "type": "array", "items": { "type": "string" }, "description": "Array of todo IDs." }
                },
                "required": ["taskId", "todoIds"]
            }
        }),
        json!({
            "name": "addNote",
            "description": "Adds a note to a specific task. Saves the modified task file.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "taskId": { "type": "string", "description": "ID of the task." },
                    "noteText": { "type": "string", "description": "Text content of the note." },
                    "noteType": { "type": "string", "description": "Type of the note (e.g., general, reminder). Defaults to general.", "default": "general" }
                },
                "required": ["taskId", "noteText"]
            }
        }),
        json!({
            "name": "addNotesBulk",
            "description": "Adds multiple notes to a specific task. Saves the modified task file once.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "taskId": { "type": "string", "description": "ID of the task." },
                    "noteDefs": {
                        "type": "array",
                        "description": "Array of note definitions [{text, type ('general' default)}].",
                        "items": {
                            "type": "object",
                            "properties": {
                                "text": { "type": "string" },
                                "type": { "type": "string", "default": "general" }
                            },
                            "required": ["text"]
                        }
                    }
                },
                "required": ["taskId", "noteDefs"]
            }
        }),
        json!({
            "name": "setStatus",
            "description": "Sets the status of a task. Saves the modified task file.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "taskId": { "type": "string", "description": "ID of the task." },
                    "status": { "type": "string", "description": "New status (new, blocked, in_progress, finished).", "enum": ["new", "blocked", "in_progress", "finished"] }
                },
                "required": ["taskId", "status"]
            }
        }),
        json!({
            "name": "listTasks",
            "description": "Lists all tasks or a specific task with details. Reads from individual task files.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "taskId": { "type": ["string", "null"], "description": "ID of a specific task to list, or null/omit to list all." }
                }
            }
        }),
        json!({
            "name": "getNotes",
            "description": "Fetches and formats notes for a specific task. Reads from the task file.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "taskId": { "type": "string", "description": "ID of the task to get notes for." }
                },
                "required": ["taskId"]
            }
        }),
    ]
}
