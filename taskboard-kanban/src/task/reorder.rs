//! Re-rank a column from an ordered id list

use super::TaskStore;
use crate::types::{ColumnId, TaskId};

impl TaskStore {
    /// Set the order of every task in `status` to its index in `ordered_ids`.
    ///
    /// Tasks in `status` whose id is absent from the list keep their order.
    /// Ids in the list that are not in `status` are ignored. Returns the
    /// number of tasks re-ranked.
    pub fn reorder_tasks(&mut self, status: &ColumnId, ordered_ids: &[TaskId]) -> usize {
        let mut reordered = 0;
        for task in self.tasks.iter_mut().filter(|t| &t.status == status) {
            if let Some(rank) = ordered_ids.iter().position(|id| id == &task.id) {
                task.order = rank as i64;
                reordered += 1;
            }
        }

        let missing = self.count_in_column(status) - reordered;
        if missing > 0 {
            tracing::warn!(
                column = %status,
                missing,
                "reorder list does not cover every task in the column"
            );
        }
        tracing::debug!(column = %status, reordered, "reordered tasks");
        reordered
    }
}
