//! Taskboard CLI - a kanban board in the terminal.
//!
//! Commands:
//! - `taskboard task add|list|update|rm|move|reorder|toggle`: Manage tasks
//! - `taskboard column add|list|rm|update|reorder`: Manage columns
//! - `taskboard drag <active> [--over ID] [--drop ID]`: Replay a drag gesture
//! - `taskboard filter [--text T] [--status S|all]`: Show or set task filters
//! - `taskboard login|register|logout|whoami`: Session
//!
//! Environment variables:
//! - TASKBOARD_DATA_DIR: Directory holding the snapshot files
//! - TASKBOARD_DEFAULT_COLUMN_COLOR: Colour tag for new columns
//! - RUST_LOG: Log filter
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

mod cli;
mod commands;
mod table;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use taskboard_kanban::{BoardConfig, KanbanBoard};

fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("taskboard=debug,taskboard_kanban=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e:#}");
            1
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<()> {
    let mut config = BoardConfig::load().context("failed to load configuration")?;
    if let Some(data_dir) = cli.data_dir {
        config = config.with_data_dir(data_dir);
    }

    let mut board = KanbanBoard::open(&config);
    let mutates = cli.command.mutates();
    tracing::debug!(command = ?cli.command, mutates, "running command");
    let output = commands::dispatch(&mut board, cli.command, cli.json)?;

    if mutates {
        board
            .save()
            .with_context(|| {
                format!("failed to save board to {}", config.data_dir.display())
            })?;
    }
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
