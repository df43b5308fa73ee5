//! Rebuild the column sequence

use super::ColumnStore;
use crate::types::ColumnId;

impl ColumnStore {
    /// Rebuild the column sequence from `new_order`.
    ///
    /// The result holds exactly the known columns named in `new_order`, in
    /// that order. Unknown ids are skipped, repeated ids keep their first
    /// position, and any column missing from the list is dropped from the
    /// board. Callers that only mean to permute must pass every column id.
    ///
    /// Returns the number of columns dropped.
    pub fn reorder_columns(&mut self, new_order: &[ColumnId]) -> usize {
        let mut remaining = std::mem::take(&mut self.columns);
        let mut reordered = Vec::with_capacity(new_order.len());
        for id in new_order {
            if let Some(index) = remaining.iter().position(|c| &c.id == id) {
                reordered.push(remaining.remove(index));
            }
        }

        let dropped = remaining.len();
        if dropped > 0 {
            let ids: Vec<&str> = remaining.iter().map(|c| c.id.as_str()).collect();
            tracing::warn!(
                dropped = ?ids,
                "column reorder omitted existing columns; they were removed from the board"
            );
        }

        self.columns = reordered;
        tracing::debug!(columns = self.columns.len(), "reordered columns");
        dropped
    }
}
