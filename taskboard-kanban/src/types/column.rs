//! Column types

use super::ids::ColumnId;
use serde::{Deserialize, Serialize};

/// Colour/category tag given to columns created without one
pub const DEFAULT_COLUMN_COLOR: &str = "todo";

/// A column (lane) defines a workflow stage. Column order is the position
/// of the column in the Column Store's sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    /// Colour/category tag used by the presentation layer
    pub color: String,
}

impl Column {
    pub fn new(
        id: impl Into<ColumnId>,
        title: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: color.into(),
        }
    }

    /// The columns of a fresh installation: To Do, In Progress, Done
    pub fn defaults() -> Vec<Column> {
        vec![
            Column::new("todo", "To Do", "todo"),
            Column::new("in-progress", "In Progress", "in-progress"),
            Column::new("done", "Done", "done"),
        ]
    }

    /// Apply a partial update. Returns true if any field changed.
    pub fn apply(&mut self, update: &ColumnUpdate) -> bool {
        let mut changed = false;
        if let Some(title) = &update.title {
            changed |= self.title != *title;
            self.title = title.clone();
        }
        if let Some(color) = &update.color {
            changed |= self.color != *color;
            self.color = color.clone();
        }
        changed
    }
}

/// A partial set of column fields. The id is not updatable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnUpdate {
    pub title: Option<String>,
    pub color: Option<String>,
}

impl ColumnUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// True if no field is set
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.color.is_none()
    }
}
