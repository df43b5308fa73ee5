//! `taskboard drag`: replay one pointer gesture

use anyhow::Result;
use taskboard_kanban::{DragAction, DragEvent, KanbanBoard, StateStorage};

use super::to_json;

pub fn run<S: StateStorage + Clone>(
    board: &mut KanbanBoard<S>,
    active: String,
    over: Option<String>,
    drop: Option<String>,
    json: bool,
) -> Result<String> {
    let mut applied = Vec::new();
    applied.extend(board.handle_drag(DragEvent::start(active)));
    if let Some(over) = over {
        applied.extend(board.handle_drag(DragEvent::over(over)));
    }
    let end = match drop {
        Some(target) => DragEvent::end(target),
        None => DragEvent::cancel(),
    };
    applied.extend(board.handle_drag(end));

    if json {
        return to_json(&applied);
    }
    if applied.is_empty() {
        return Ok("No change".to_string());
    }
    Ok(applied.iter().map(describe).collect::<Vec<_>>().join("\n"))
}

fn describe(action: &DragAction) -> String {
    match action {
        DragAction::ReorderTasks {
            status,
            ordered_ids,
        } => {
            let ids: Vec<&str> = ordered_ids.iter().map(|id| id.as_str()).collect();
            format!("Reordered {status}: {}", ids.join(", "))
        }
        DragAction::MoveTask { id, status, order } => {
            format!("Moved {id} to {status} at position {order}")
        }
        DragAction::ReorderColumns { ordered_ids } => {
            let ids: Vec<&str> = ordered_ids.iter().map(|id| id.as_str()).collect();
            format!("Columns: {}", ids.join(", "))
        }
    }
}
