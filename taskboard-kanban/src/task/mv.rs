//! Move a task to a column position

use super::TaskStore;
use crate::types::{ColumnId, TaskId};

impl TaskStore {
    /// Move a task into `new_status` at rank `new_order`.
    ///
    /// The destination column is rebuilt as a dense `0..n` sequence with a
    /// slot opened at `new_order`: tasks ranked before the slot keep their
    /// rank, tasks at or after it shift down by one. The source column, when
    /// different, keeps its current (possibly gapped) orders.
    ///
    /// `new_order` is clamped to `0..=n` where `n` is the number of other
    /// tasks already in the destination. Returns false if the task is unknown.
    pub fn move_task(
        &mut self,
        id: &TaskId,
        new_status: impl Into<ColumnId>,
        new_order: i64,
    ) -> bool {
        let Some(index) = self.position(id) else {
            tracing::debug!(task = %id, "move ignored: task not found");
            return false;
        };
        let new_status = new_status.into();
        let mut moved = self.tasks.remove(index);
        let from = moved.status.clone();

        let (mut destination, untouched): (Vec<_>, Vec<_>) = std::mem::take(&mut self.tasks)
            .into_iter()
            .partition(|t| t.status == new_status);

        let new_order = new_order.clamp(0, destination.len() as i64);

        // Stable: equal orders keep their collection position
        destination.sort_by_key(|t| t.order);
        for (rank, task) in destination.iter_mut().enumerate() {
            let rank = rank as i64;
            task.order = if rank >= new_order { rank + 1 } else { rank };
        }

        moved.status = new_status;
        moved.order = new_order;

        tracing::debug!(
            task = %id,
            from = %from,
            to = %moved.status,
            order = new_order,
            "moved task"
        );

        self.tasks = untouched;
        self.tasks.extend(destination);
        self.tasks.push(moved);
        true
    }
}
