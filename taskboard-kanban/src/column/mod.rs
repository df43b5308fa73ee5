//! Column Store: the sole owner of the column collection and column order.
//!
//! Column order is the position in the sequence. Deleting a column does not
//! touch tasks that reference it.

mod add;
mod delete;
mod reorder;
mod update;

use crate::types::{Column, ColumnId, DEFAULT_COLUMN_COLOR};
use serde::{Deserialize, Serialize};

fn default_color() -> String {
    DEFAULT_COLUMN_COLOR.to_string()
}

fn default_columns() -> Vec<Column> {
    Column::defaults()
}

/// The ordered column sequence of a board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStore {
    #[serde(default = "default_columns")]
    columns: Vec<Column>,
    /// Tag given to columns created by [`ColumnStore::add_column`]. Not persisted.
    #[serde(skip, default = "default_color")]
    default_color: String,
}

impl Default for ColumnStore {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            default_color: default_color(),
        }
    }
}

impl ColumnStore {
    /// A store holding the three default columns
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding exactly `columns`
    pub fn with_columns(columns: Vec<Column>) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    pub fn set_default_color(&mut self, color: impl Into<String>) {
        self.default_color = color.into();
    }

    pub fn default_color(&self) -> &str {
        &self.default_color
    }

    /// Columns in board order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn get(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    pub fn contains(&self, id: &ColumnId) -> bool {
        self.get(id).is_some()
    }

    /// Column ids in board order
    pub fn ids(&self) -> Vec<ColumnId> {
        self.columns.iter().map(|c| c.id.clone()).collect()
    }

    /// Index of a column in board order
    pub fn index_of(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == id)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_has_default_columns() {
        let store = ColumnStore::new();
        let ids: Vec<&str> = store.columns().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["todo", "in-progress", "done"]);
        assert_eq!(store.default_color(), "todo");
    }

    #[test]
    fn test_lookup() {
        let store = ColumnStore::new();
        assert!(store.contains(&"done".into()));
        assert!(!store.contains(&"blocked".into()));
        assert_eq!(store.index_of(&"in-progress".into()), Some(1));
        assert_eq!(store.get(&"todo".into()).unwrap().title, "To Do");
    }

    #[test]
    fn test_snapshot_without_columns_uses_defaults() {
        let store: ColumnStore = serde_json::from_str("{}").unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.default_color(), "todo");
    }

    #[test]
    fn test_snapshot_with_empty_columns_is_kept() {
        let store: ColumnStore = serde_json::from_str(r#"{"columns": []}"#).unwrap();
        assert!(store.is_empty());
    }
}
