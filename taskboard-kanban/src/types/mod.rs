//! Core types for the kanban engine

mod column;
mod filter;
mod ids;
mod task;

pub use column::{Column, ColumnUpdate, DEFAULT_COLUMN_COLOR};
pub use filter::{title_matches, StatusFilter};
pub use ids::{ColumnId, TaskId};
pub use task::{Task, TaskUpdate};
