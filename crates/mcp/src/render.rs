#![forbid(unsafe_code)]

use crate::ts_ms_to_date;
use tm_storage::{NotesView, ParentRef, TaskDetail, TaskSummary};

pub(crate) fn render_all(summaries: &[TaskSummary]) -> String {
    if summaries.is_empty() {
        return "No tasks found.".to_string();
    }

    let mut out = Vec::new();
    out.push("Tasks (Summary):".to_string());
    for summary in summaries {
        push_summary(&mut out, summary);
        out.push("---".to_string());
    }
    out.join("\n")
}

pub(crate) fn render_detail(detail: &TaskDetail) -> String {
    let mut out = Vec::new();
    push_summary(&mut out, &detail.summary);

    if detail.todos.is_empty() {
        out.push("   Detailed Todos: None".to_string());
    } else {
        out.push("   Detailed Todos:".to_string());
        for todo in &detail.todos {
            let mark = if todo.done { "✓" } else { "✗" };
            out.push(format!(
                "     - [{mark}] (ID: {}) {} (Added: {})",
                todo.id,
                todo.text,
                ts_ms_to_date(todo.created_at_ms)
            ));
        }
    }

    if detail.notes.is_empty() {
        out.push("   Detailed Notes: None".to_string());
    } else {
        out.push("   Detailed Notes:".to_string());
        for note in &detail.notes {
            out.push(format!(
                "     - (ID: {}) [{}] {} (Added: {})",
                note.id,
                note.note_type,
                note.text,
                ts_ms_to_date(note.created_at_ms)
            ));
        }
    }

    out.join("\n")
}

pub(crate) fn render_notes(view: &NotesView) -> String {
    if view.notes.is_empty() {
        return format!("No notes for task {} (\"{}\").", view.task_id, view.task_name);
    }

    let mut out = Vec::new();
    out.push(format!(
        "Notes for Task {} (\"{}\"):",
        view.task_id, view.task_name
    ));
    for note in &view.notes {
        out.push(format!(
            "   - (ID: {}) [{}] {} (Added: {})",
            note.id,
            note.note_type,
            note.text,
            ts_ms_to_date(note.created_at_ms)
        ));
    }
    out.join("\n")
}

fn push_summary(out: &mut Vec<String>, summary: &TaskSummary) {
    out.push(format!(
        "- ID: {}, Name: {}, Status: {} (Created: {}, Updated: {})",
        summary.id,
        summary.name,
        summary.status.as_str(),
        ts_ms_to_date(summary.created_at_ms),
        ts_ms_to_date(summary.updated_at_ms)
    ));

    match &summary.parent {
        ParentRef::None => out.push("   Parent: None".to_string()),
        ParentRef::Found { id, name } => {
            out.push(format!("   Parent: ID: {id} - \"{name}\""));
        }
        ParentRef::Missing { id } => out.push(format!(
            "   Parent: ID: {id} (Not found - data may be inconsistent if the parent record is missing)"
        )),
    }

    if summary.children.is_empty() {
        out.push("   Children: None".to_string());
    } else {
        out.push("   Children:".to_string());
        for child in &summary.children {
            out.push(format!(
                "     - ID: {} - \"{}\" (Status: {})",
                child.id,
                child.name,
                child.status.as_str()
            ));
        }
    }

    out.push(format!(
        "   Todo Summary: Open: {}, Done: {} (Total: {})",
        summary.open_todos,
        summary.done_todos,
        summary.open_todos + summary.done_todos
    ));
    out.push(format!("   Notes Count: {}", summary.note_count));
}
