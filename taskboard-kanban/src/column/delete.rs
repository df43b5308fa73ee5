//! Delete a column

use super::ColumnStore;
use crate::types::ColumnId;

impl ColumnStore {
    /// Remove a column. Tasks whose status references it are left as they
    /// are, holding a stale status.
    pub fn delete_column(&mut self, id: &ColumnId) -> bool {
        let Some(index) = self.index_of(id) else {
            tracing::debug!(column = %id, "delete ignored: column not found");
            return false;
        };
        self.columns.remove(index);
        tracing::debug!(column = %id, "deleted column");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_column() {
        let mut store = ColumnStore::new();
        assert!(store.delete_column(&"in-progress".into()));
        let ids: Vec<&str> = store.columns().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["todo", "done"]);
    }

    #[test]
    fn test_delete_unknown_column_is_noop() {
        let mut store = ColumnStore::new();
        assert!(!store.delete_column(&"nonexistent".into()));
        assert_eq!(store.len(), 3);
    }
}
