//! Kanban task board engine
//!
//! Tasks live in ordered columns. Each store is the sole owner of its data:
//! the [`TaskStore`] owns tasks and their per-column order, the
//! [`ColumnStore`] owns the column sequence, and the [`AuthStore`] owns the
//! signed-in user. A [`DragController`] turns pointer gestures into store
//! operations, and every store is saved as a JSON snapshot after each change.
//!
//! ## Ordering
//!
//! A task's position in its column is its `order`. Operations that go
//! through [`TaskStore::move_task`] or [`TaskStore::reorder_tasks`] leave the
//! affected column dense: orders `0..n-1` with no duplicates.
//!
//! ## Basic Usage
//!
//! ```rust
//! use taskboard_kanban::{BoardConfig, DragEvent, KanbanBoard, MemoryStorage};
//!
//! let mut board = KanbanBoard::new(MemoryStorage::new(), &BoardConfig::default());
//! let spec = board.add_task("Write spec", "todo").unwrap();
//! board.add_task("Review", "todo").unwrap();
//!
//! // Drag "Write spec" onto the Done column
//! board.handle_drag(DragEvent::start(spec.as_str()));
//! board.handle_drag(DragEvent::end("done"));
//!
//! assert_eq!(board.tasks().get(&spec).unwrap().status, "done");
//! ```
//!
//! ## Storage
//!
//! ```text
//! <data_dir>/
//! ├── kanban-storage.json   # tasks, filter, statusFilter
//! ├── board-storage.json    # columns
//! └── auth-storage.json     # user, isAuthenticated
//! ```
//!
//! Each file holds `{"state": {...}, "version": 0}`.

pub mod auth;
pub mod board;
pub mod column;
pub mod config;
pub mod drag;
mod error;
pub mod ordering;
pub mod persist;
pub mod task;
pub mod types;

pub use auth::{AuthStore, User};
pub use board::KanbanBoard;
pub use column::ColumnStore;
pub use config::BoardConfig;
pub use drag::{DragAction, DragController, DragEvent, DragKind, DragState};
pub use error::{KanbanError, Result};
pub use persist::{FileStorage, MemoryStorage, Persisted, Snapshot, StateStorage};
pub use task::TaskStore;

// Re-export commonly used types
pub use types::{
    Column, ColumnId, ColumnUpdate, StatusFilter, Task, TaskId, TaskUpdate, DEFAULT_COLUMN_COLOR,
};
