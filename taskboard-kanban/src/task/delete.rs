//! Delete a task

use super::TaskStore;
use crate::types::TaskId;

impl TaskStore {
    /// Remove the task with `id`.
    ///
    /// Remaining orders in the task's column are not renormalized; the gap is
    /// closed by the next move into, or reorder of, that column.
    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        let Some(index) = self.position(id) else {
            tracing::debug!(task = %id, "delete ignored: task not found");
            return false;
        };
        let removed = self.tasks.remove(index);
        tracing::debug!(task = %id, column = %removed.status, "deleted task");
        true
    }
}
