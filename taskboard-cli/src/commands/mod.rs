//! Command handlers. Each returns the text to print on stdout.

mod column;
mod drag;
mod session;
mod task;

use anyhow::{bail, Result};
use serde::Serialize;
use taskboard_kanban::{ColumnId, KanbanBoard, StateStorage};

use crate::cli::Commands;

/// Run one command against `board`
pub fn dispatch<S: StateStorage + Clone>(
    board: &mut KanbanBoard<S>,
    command: Commands,
    json: bool,
) -> Result<String> {
    match command {
        Commands::Task { action } => task::run(board, action, json),
        Commands::Column { action } => column::run(board, action, json),
        Commands::Drag { active, over, drop } => drag::run(board, active, over, drop, json),
        Commands::Filter { text, status } => task::filter(board, text, status, json),
        Commands::Login {
            email,
            password,
            name,
        } => session::login(board, &email, &password, name.as_deref(), json),
        Commands::Register {
            email,
            name,
            password,
        } => session::register(board, &email, &password, &name, json),
        Commands::Logout => session::logout(board, json),
        Commands::Whoami => session::whoami(board, json),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Resolve a column id given on the command line
fn known_column<S: StateStorage + Clone>(board: &KanbanBoard<S>, id: &str) -> Result<ColumnId> {
    let id = ColumnId::from(id);
    if !board.columns().contains(&id) {
        let known: Vec<&str> = board
            .columns()
            .columns()
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        bail!("unknown column '{id}' (columns: {})", known.join(", "));
    }
    Ok(id)
}

#[cfg(test)]
pub(crate) mod test_support {
    use taskboard_kanban::{BoardConfig, KanbanBoard, MemoryStorage};

    pub fn board() -> KanbanBoard<MemoryStorage> {
        KanbanBoard::new(MemoryStorage::new(), &BoardConfig::default())
    }
}
