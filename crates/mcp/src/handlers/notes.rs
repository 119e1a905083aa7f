#![forbid(unsafe_code)]

use crate::McpServer;
use serde_json::{Value, json};
use tm_storage::NoteDef;

const DEFAULT_NOTE_TYPE: &str = "general";

pub(crate) fn add_note(server: &mut McpServer, args: Value) -> Value {
    let args_obj = match crate::args_object(&args) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let task_id = match crate::require_str(args_obj, "taskId") {
        Ok(v) => v.to_string(),
        Err(resp) => return resp,
    };
    let text = match crate::require_str(args_obj, "noteText") {
        Ok(v) => v.to_string(),
        Err(resp) => return resp,
    };
    // The schema default is resolved here; the engine only sees a fully
    // populated definition.
    let note_type = match crate::optional_str(args_obj, "noteType") {
        Ok(v) => v.unwrap_or_else(|| DEFAULT_NOTE_TYPE.to_string()),
        Err(resp) => return resp,
    };

    match server.engine.add_note(&task_id, NoteDef { text, note_type }) {
        Ok(message) => crate::ai_ok("addNote", json!({ "message": message })),
        Err(err) => crate::engine_error_response(&err),
    }
}

pub(crate) fn add_notes_bulk(server: &mut McpServer, args: Value) -> Value {
    let args_obj = match crate::args_object(&args) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let task_id = match crate::require_str(args_obj, "taskId") {
        Ok(v) => v.to_string(),
        Err(resp) => return resp,
    };
    let raw_defs = match crate::require_array(args_obj, "noteDefs") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let mut defs = Vec::with_capacity(raw_defs.len());
    for raw in raw_defs {
        let Some(def_obj) = raw.as_object() else {
            return crate::ai_error("INVALID_INPUT", "noteDefs entries must be objects");
        };
        let text = match crate::require_str(def_obj, "text") {
            Ok(v) => v.to_string(),
            Err(resp) => return resp,
        };
        let note_type = match crate::optional_str(def_obj, "type") {
            Ok(v) => v.unwrap_or_else(|| DEFAULT_NOTE_TYPE.to_string()),
            Err(resp) => return resp,
        };
        defs.push(NoteDef { text, note_type });
    }

    match server.engine.add_notes_bulk(&task_id, defs) {
        Ok(outcome) => super::todos::bulk_outcome_response("addNotesBulk", &outcome),
        Err(err) => crate::engine_error_response(&err),
    }
}

pub(crate) fn get_notes(server: &mut McpServer, args: Value) -> Value {
    let args_obj = match crate::args_object(&args) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let task_id = match crate::require_str(args_obj, "taskId") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match server.engine.notes_view(task_id) {
        Ok(view) => crate::ai_text("getNotes", crate::render::render_notes(&view)),
        Err(err) => crate::engine_error_response(&err),
    }
}
