//! Toggle a task's completed flag

use super::TaskStore;
use crate::types::TaskId;

impl TaskStore {
    /// Flip the completed flag of a task. An unset flag counts as incomplete,
    /// so the first toggle marks the task complete.
    pub fn toggle_task_complete(&mut self, id: &TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) else {
            tracing::debug!(task = %id, "toggle ignored: task not found");
            return false;
        };
        let completed = !task.is_completed();
        task.completed = Some(completed);
        tracing::debug!(task = %id, completed, "toggled task completion");
        true
    }
}
