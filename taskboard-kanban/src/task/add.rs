//! Add a task to the end of a column

use super::TaskStore;
use crate::error::{KanbanError, Result};
use crate::ordering;
use crate::types::{ColumnId, Task, TaskId};

impl TaskStore {
    /// Append a new task to the end of `status`.
    ///
    /// The title is trimmed; an empty title is rejected. The new task gets
    /// `order = max(order in status) + 1`, or 0 for an empty column.
    pub fn add_task(&mut self, title: &str, status: impl Into<ColumnId>) -> Result<TaskId> {
        let title = title.trim();
        if title.is_empty() {
            return Err(KanbanError::empty_title("task"));
        }
        let status = status.into();
        let order = ordering::next_order(&self.tasks, &status);
        let task = Task::new(title, status, order);
        let id = task.id.clone();

        tracing::debug!(task = %id, column = %task.status, order, "added task");
        self.tasks.push(task);
        Ok(id)
    }
}
