//! CLI definition for the taskboard command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Taskboard - a kanban board in the terminal.
///
/// Tasks live in ordered columns. State is kept as JSON snapshots in the
/// data directory (default: the platform data dir + "taskboard").
#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(version)]
#[command(about = "Kanban task board with ordered columns and drag-and-drop reordering")]
#[command(
    long_about = "Taskboard keeps tasks in ordered columns and persists every change.\n\n\
    Configuration is read from taskboard.toml, taskboard.yaml or taskboard.json in the \
    working directory.\n\n\
    Environment variables:\n  \
    TASKBOARD_DATA_DIR              Directory holding the snapshot files\n  \
    TASKBOARD_DEFAULT_COLUMN_COLOR  Colour tag for new columns\n  \
    RUST_LOG                        Log filter (default: warn)"
)]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Override the data directory
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage tasks
    Task {
        #[command(subcommand)]
        action: TaskCommand,
    },

    /// Manage columns
    Column {
        #[command(subcommand)]
        action: ColumnCommand,
    },

    /// Replay one drag gesture: start on ACTIVE, optionally hover, then drop
    Drag {
        /// Id of the task or column being dragged
        active: String,
        /// Id hovered before the drop (task reorder preview)
        #[arg(long, value_name = "ID")]
        over: Option<String>,
        /// Id of the drop target; omit to cancel the gesture
        #[arg(long, value_name = "ID")]
        drop: Option<String>,
    },

    /// Show or set the task filters
    Filter {
        /// Case-insensitive title substring; empty string clears it
        #[arg(long)]
        text: Option<String>,
        /// Column id, or "all"
        #[arg(long)]
        status: Option<String>,
    },

    /// Sign in (no credentials are checked)
    Login {
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        /// Display name; defaults to the part of the email before '@'
        #[arg(long)]
        name: Option<String>,
    },

    /// Create an account and sign in
    Register {
        email: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        password: String,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,
}

#[derive(Subcommand, Debug)]
pub enum TaskCommand {
    /// Add a task at the end of a column
    Add {
        title: String,
        /// Column id
        #[arg(long, default_value = "todo")]
        column: String,
    },

    /// List tasks per column, honouring the filters
    List {
        /// Only this column
        #[arg(long)]
        column: Option<String>,
    },

    /// Change task fields
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        /// Column id (does not re-rank; use `task move`)
        #[arg(long)]
        column: Option<String>,
        #[arg(long)]
        order: Option<i64>,
        #[arg(long)]
        completed: Option<bool>,
    },

    /// Delete a task
    Rm { id: String },

    /// Move a task to a column position
    Move {
        id: String,
        /// Destination column id
        column: String,
        /// Destination position; defaults to the end of the column
        #[arg(long)]
        order: Option<i64>,
    },

    /// Set the order of a column's tasks
    Reorder {
        /// Column id
        column: String,
        /// Task ids in the new order
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Flip a task's completed flag
    Toggle { id: String },
}

#[derive(Subcommand, Debug)]
pub enum ColumnCommand {
    /// Append a column
    Add { title: String },

    /// List columns in board order
    List,

    /// Delete a column (its tasks are kept)
    Rm { id: String },

    /// Change column fields
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },

    /// Rebuild the column order. Columns not listed are removed.
    Reorder {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

impl Commands {
    /// True if the command changes board state
    pub fn mutates(&self) -> bool {
        match self {
            Self::Task { action } => !matches!(action, TaskCommand::List { .. }),
            Self::Column { action } => !matches!(action, ColumnCommand::List),
            Self::Filter { text, status } => text.is_some() || status.is_some(),
            Self::Whoami => false,
            Self::Drag { .. } | Self::Login { .. } | Self::Register { .. } | Self::Logout => true,
        }
    }
}
