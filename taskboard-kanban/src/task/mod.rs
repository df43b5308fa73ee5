//! Task Store: the sole owner of the task collection and of task order.
//!
//! Each mutation lives in its own module. Mutations that reference an unknown
//! task id are no-ops and report `false`; they never return an error.

mod add;
mod complete;
mod delete;
mod filter;
mod mv;
mod reorder;
mod update;

use crate::ordering;
use crate::types::{title_matches, ColumnId, StatusFilter, Task, TaskId};
use serde::{Deserialize, Serialize};

/// The task collection plus the presentation filters that are persisted with it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStore {
    #[serde(default)]
    tasks: Vec<Task>,
    #[serde(default)]
    filter: String,
    #[serde(default)]
    status_filter: StatusFilter,
}

impl TaskStore {
    /// An empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the given tasks, as-is
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }

    /// All tasks in collection order (not display order)
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks in `status`, sorted by order
    pub fn column_tasks(&self, status: &ColumnId) -> Vec<&Task> {
        ordering::column_indices(&self.tasks, status)
            .into_iter()
            .map(|i| &self.tasks[i])
            .collect()
    }

    /// Ids of the tasks in `status`, sorted by order
    pub fn column_sequence(&self, status: &ColumnId) -> Vec<TaskId> {
        ordering::column_sequence(&self.tasks, status)
    }

    pub fn count_in_column(&self, status: &ColumnId) -> usize {
        self.tasks.iter().filter(|t| &t.status == status).count()
    }

    /// Tasks in `status` that pass the text and status filters, sorted by order
    pub fn visible_tasks(&self, status: &ColumnId) -> Vec<&Task> {
        if !self.status_filter.matches(status) {
            return Vec::new();
        }
        self.column_tasks(status)
            .into_iter()
            .filter(|t| title_matches(t, &self.filter))
            .collect()
    }

    /// Restore the dense ordering of `status`. Returns how many orders changed.
    pub fn normalize_column(&mut self, status: &ColumnId) -> usize {
        let changed = ordering::normalize(&mut self.tasks, status);
        if changed > 0 {
            tracing::debug!(column = %status, changed, "normalized column order");
        }
        changed
    }

    fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }
}
