//! Partial task updates

use super::TaskStore;
use crate::types::{TaskId, TaskUpdate};

impl TaskStore {
    /// Merge `update` into the task with `id`.
    ///
    /// Returns false (and does nothing) if no such task exists. Writing
    /// `status` or `order` directly bypasses the ordering model; use
    /// [`TaskStore::move_task`] for positional changes.
    pub fn update_task(&mut self, id: &TaskId, update: &TaskUpdate) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) else {
            tracing::debug!(task = %id, "update ignored: task not found");
            return false;
        };
        if task.apply(update) {
            tracing::debug!(task = %id, "updated task");
        }
        true
    }
}
