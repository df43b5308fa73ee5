//! Partial column updates

use super::ColumnStore;
use crate::types::{ColumnId, ColumnUpdate};

impl ColumnStore {
    /// Merge `update` into the column with `id`. Unknown ids are ignored.
    pub fn update_column(&mut self, id: &ColumnId, update: &ColumnUpdate) -> bool {
        let Some(column) = self.columns.iter_mut().find(|c| &c.id == id) else {
            tracing::debug!(column = %id, "update ignored: column not found");
            return false;
        };
        if column.apply(update) {
            tracing::debug!(column = %id, "updated column");
        }
        true
    }
}
