//! `taskboard task ...` and `taskboard filter`

use anyhow::{bail, Result};
use serde_json::json;
use taskboard_kanban::{
    ColumnId, KanbanBoard, KanbanError, StateStorage, StatusFilter, TaskId, TaskUpdate,
};

use super::{known_column, to_json};
use crate::cli::TaskCommand;
use crate::table::{new_table, truncate_str};

pub fn run<S: StateStorage + Clone>(
    board: &mut KanbanBoard<S>,
    action: TaskCommand,
    json: bool,
) -> Result<String> {
    match action {
        TaskCommand::Add { title, column } => {
            let column = known_column(board, &column)?;
            let id = board.add_task(&title, column.clone())?;
            if json {
                return to_json(&board.tasks().get(&id));
            }
            Ok(format!("Added task {id} to {column}"))
        }

        TaskCommand::List { column } => {
            let columns = match column {
                Some(id) => vec![known_column(board, &id)?],
                None => board.columns().ids(),
            };
            list(board, &columns, json)
        }

        TaskCommand::Update {
            id,
            title,
            column,
            order,
            completed,
        } => {
            let mut update = TaskUpdate::new();
            if let Some(title) = title {
                let title = title.trim();
                if title.is_empty() {
                    return Err(KanbanError::empty_title("task").into());
                }
                update = update.with_title(title);
            }
            if let Some(column) = column {
                update = update.with_status(known_column(board, &column)?);
            }
            if let Some(order) = order {
                update = update.with_order(order);
            }
            if let Some(completed) = completed {
                update = update.with_completed(completed);
            }
            if update.is_empty() {
                bail!("nothing to update: pass --title, --column, --order or --completed");
            }

            let id = TaskId::from(id);
            if !board.update_task(&id, &update) {
                bail!("task not found: {id}");
            }
            done(board, &id, json, "Updated")
        }

        TaskCommand::Rm { id } => {
            let id = TaskId::from(id);
            if !board.delete_task(&id) {
                bail!("task not found: {id}");
            }
            if json {
                return to_json(&json!({ "deleted": id }));
            }
            Ok(format!("Deleted task {id}"))
        }

        TaskCommand::Move { id, column, order } => {
            let id = TaskId::from(id);
            let column = known_column(board, &column)?;
            let order = match order {
                Some(order) => order,
                None => append_order(board, &id, &column),
            };
            if !board.move_task(&id, column, order) {
                bail!("task not found: {id}");
            }
            done(board, &id, json, "Moved")
        }

        TaskCommand::Reorder { column, ids } => {
            let column = known_column(board, &column)?;
            let ids: Vec<TaskId> = ids.into_iter().map(TaskId::from).collect();
            let reordered = board.reorder_tasks(&column, &ids);
            if json {
                return to_json(&json!({ "column": column, "reordered": reordered }));
            }
            Ok(format!("Reordered {reordered} task(s) in {column}"))
        }

        TaskCommand::Toggle { id } => {
            let id = TaskId::from(id);
            if !board.toggle_task_complete(&id) {
                bail!("task not found: {id}");
            }
            done(board, &id, json, "Toggled")
        }
    }
}

/// Show or change the filters, then list what they let through
pub fn filter<S: StateStorage + Clone>(
    board: &mut KanbanBoard<S>,
    text: Option<String>,
    status: Option<String>,
    json: bool,
) -> Result<String> {
    if let Some(text) = text {
        board.set_filter(text);
    }
    if let Some(status) = status {
        let status = match StatusFilter::parse(&status) {
            StatusFilter::All => StatusFilter::All,
            StatusFilter::Column(id) => StatusFilter::Column(known_column(board, id.as_str())?),
        };
        board.set_status_filter(status);
    }

    let tasks = board.tasks();
    if json {
        return to_json(&json!({
            "filter": tasks.filter(),
            "statusFilter": tasks.status_filter(),
        }));
    }
    Ok(format!(
        "filter: {:?}\nstatus: {}",
        tasks.filter(),
        tasks.status_filter()
    ))
}

/// Position at the end of `column`, not counting `id` itself
fn append_order<S: StateStorage + Clone>(
    board: &KanbanBoard<S>,
    id: &TaskId,
    column: &ColumnId,
) -> i64 {
    board
        .tasks()
        .column_tasks(column)
        .iter()
        .filter(|t| &t.id != id)
        .count() as i64
}

fn done<S: StateStorage + Clone>(
    board: &KanbanBoard<S>,
    id: &TaskId,
    json: bool,
    verb: &str,
) -> Result<String> {
    let Some(task) = board.tasks().get(id) else {
        bail!("task not found: {id}");
    };
    if json {
        return to_json(task);
    }
    Ok(format!(
        "{verb} task {id}: {} [{} #{}]",
        task.title, task.status, task.order
    ))
}

fn list<S: StateStorage + Clone>(
    board: &KanbanBoard<S>,
    columns: &[ColumnId],
    json: bool,
) -> Result<String> {
    if json {
        let out: Vec<_> = columns
            .iter()
            .map(|id| {
                let tasks = board.visible_tasks(id);
                json!({ "column": id, "tasks": tasks })
            })
            .collect();
        return to_json(&out);
    }

    let mut table = new_table(["Column", "#", "Id", "Title", "Done"]);
    let mut rows = 0;
    for column in columns {
        for task in board.visible_tasks(column) {
            table.add_row(vec![
                column.to_string(),
                task.order.to_string(),
                task.id.to_string(),
                truncate_str(&task.title, 60),
                if task.is_completed() { "x" } else { "" }.to_string(),
            ]);
            rows += 1;
        }
    }
    if rows == 0 {
        return Ok("No tasks".to_string());
    }
    Ok(table.to_string())
}
