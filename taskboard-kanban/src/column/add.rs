//! Append a column

use super::ColumnStore;
use crate::error::{KanbanError, Result};
use crate::types::{Column, ColumnId};

impl ColumnStore {
    /// Append a new column with a generated id and the default colour tag.
    pub fn add_column(&mut self, title: &str) -> Result<ColumnId> {
        let title = title.trim();
        if title.is_empty() {
            return Err(KanbanError::empty_title("column"));
        }

        let mut id = ColumnId::generate();
        while self.contains(&id) {
            id = ColumnId::generate();
        }

        tracing::debug!(column = %id, title, "added column");
        self.columns
            .push(Column::new(id.clone(), title, self.default_color.clone()));
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_column_appends() {
        let mut store = ColumnStore::new();
        let id = store.add_column("Blocked").unwrap();

        assert_eq!(store.len(), 4);
        let last = store.columns().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.title, "Blocked");
        assert_eq!(last.color, "todo");
    }

    #[test]
    fn test_add_column_uses_configured_color() {
        let mut store = ColumnStore::new();
        store.set_default_color("backlog");
        let id = store.add_column("Later").unwrap();
        assert_eq!(store.get(&id).unwrap().color, "backlog");
    }

    #[test]
    fn test_add_column_ids_unique() {
        let mut store = ColumnStore::new();
        let a = store.add_column("A").unwrap();
        let b = store.add_column("A").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_add_column_rejects_empty_title() {
        let mut store = ColumnStore::new();
        let result = store.add_column("  ");
        assert!(matches!(
            result,
            Err(KanbanError::EmptyTitle { entity: "column" })
        ));
        assert_eq!(store.len(), 3);
    }
}
