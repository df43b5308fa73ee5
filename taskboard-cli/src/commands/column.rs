//! `taskboard column ...`

use anyhow::{bail, Result};
use serde_json::json;
use taskboard_kanban::{ColumnId, ColumnUpdate, KanbanBoard, KanbanError, StateStorage};

use super::{known_column, to_json};
use crate::cli::ColumnCommand;
use crate::table::new_table;

pub fn run<S: StateStorage + Clone>(
    board: &mut KanbanBoard<S>,
    action: ColumnCommand,
    json: bool,
) -> Result<String> {
    match action {
        ColumnCommand::Add { title } => {
            let id = board.add_column(&title)?;
            if json {
                return to_json(&board.columns().get(&id));
            }
            Ok(format!("Added column {id}"))
        }

        ColumnCommand::List => {
            let columns = board.columns().columns();
            if json {
                return to_json(columns);
            }
            let mut table = new_table(["Id", "Title", "Color", "Tasks"]);
            for column in columns {
                table.add_row(vec![
                    column.id.to_string(),
                    column.title.clone(),
                    column.color.clone(),
                    board.tasks().count_in_column(&column.id).to_string(),
                ]);
            }
            Ok(table.to_string())
        }

        ColumnCommand::Rm { id } => {
            let id = ColumnId::from(id);
            if !board.delete_column(&id) {
                bail!("column not found: {id}");
            }
            let orphaned = board.tasks().count_in_column(&id);
            if json {
                return to_json(&json!({ "deleted": id, "orphanedTasks": orphaned }));
            }
            if orphaned > 0 {
                return Ok(format!(
                    "Deleted column {id} ({orphaned} task(s) still reference it)"
                ));
            }
            Ok(format!("Deleted column {id}"))
        }

        ColumnCommand::Update { id, title, color } => {
            let id = known_column(board, &id)?;
            let mut update = ColumnUpdate::new();
            if let Some(title) = title {
                let title = title.trim();
                if title.is_empty() {
                    return Err(KanbanError::empty_title("column").into());
                }
                update = update.with_title(title);
            }
            if let Some(color) = color {
                update = update.with_color(color);
            }
            if update.is_empty() {
                bail!("nothing to update: pass --title or --color");
            }
            board.update_column(&id, &update);
            if json {
                return to_json(&board.columns().get(&id));
            }
            Ok(format!("Updated column {id}"))
        }

        ColumnCommand::Reorder { ids } => {
            let ids: Vec<ColumnId> = ids.into_iter().map(ColumnId::from).collect();
            let dropped = board.reorder_columns(&ids);
            if json {
                let summary = json!({ "columns": board.columns().ids(), "dropped": dropped });
                return to_json(&summary);
            }
            let order: Vec<String> = board
                .columns()
                .ids()
                .iter()
                .map(|id| id.to_string())
                .collect();
            if dropped > 0 {
                return Ok(format!(
                    "Columns: {} ({dropped} unlisted column(s) removed)",
                    order.join(", ")
                ));
            }
            Ok(format!("Columns: {}", order.join(", ")))
        }
    }
}
