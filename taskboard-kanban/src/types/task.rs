//! Task types: Task and the partial update applied to it

use super::ids::{ColumnId, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task/card on the kanban board.
///
/// `order` is the task's rank within its column (`status`). It is dense and
/// zero-based after every move or reorder, but may be gapped after a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// The column this task belongs to. A weak reference: the column may
    /// have been deleted.
    pub status: ColumnId,
    pub created_at: DateTime<Utc>,
    pub order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl Task {
    /// Create a new task in the given column at the given order
    pub fn new(title: impl Into<String>, status: impl Into<ColumnId>, order: i64) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            status: status.into(),
            created_at: Utc::now(),
            order,
            completed: None,
        }
    }

    /// Whether the task is marked complete. An unset flag reads as incomplete.
    pub fn is_completed(&self) -> bool {
        self.completed.unwrap_or(false)
    }

    /// Apply a partial update. Returns true if any field changed.
    pub fn apply(&mut self, update: &TaskUpdate) -> bool {
        let before = self.clone();
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(status) = &update.status {
            self.status = status.clone();
        }
        if let Some(order) = update.order {
            self.order = order;
        }
        if let Some(completed) = update.completed {
            self.completed = Some(completed);
        }
        *self != before
    }
}

/// A partial set of task fields. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub status: Option<ColumnId>,
    pub order: Option<i64>,
    pub completed: Option<bool>,
}

impl TaskUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<ColumnId>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// True when the update carries no fields
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.status.is_none()
            && self.order.is_none()
            && self.completed.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_serializes_camel_case() {
        let task = Task::new("Write spec", "todo", 0);
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["title"], "Write spec");
        assert_eq!(json["status"], "todo");
        assert_eq!(json["order"], 0);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("completed").is_none());
    }

    #[test]
    fn test_task_reads_snapshot_without_completed() {
        let json = r#"{
            "id": "abc",
            "title": "Review",
            "status": "in-progress",
            "createdAt": "2024-05-01T10:00:00.000Z",
            "order": 3
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "abc");
        assert_eq!(task.order, 3);
        assert!(!task.is_completed());
    }

    #[test]
    fn test_apply_partial_update() {
        let mut task = Task::new("Old", "todo", 2);
        let changed = task.apply(&TaskUpdate::new().with_title("New").with_completed(true));
        assert!(changed);
        assert_eq!(task.title, "New");
        assert_eq!(task.status, "todo");
        assert_eq!(task.order, 2);
        assert!(task.is_completed());
    }

    #[test]
    fn test_apply_identical_update_reports_no_change() {
        let mut task = Task::new("Same", "todo", 0);
        assert!(!task.apply(&TaskUpdate::new().with_title("Same")));
        assert!(!task.apply(&TaskUpdate::new()));
    }

    #[test]
    fn test_update_is_empty() {
        assert!(TaskUpdate::new().is_empty());
        assert!(!TaskUpdate::new().with_order(1).is_empty());
    }
}
