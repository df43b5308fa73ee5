//! Drag-Interaction Controller
//!
//! A two-state machine (`Idle`, `Dragging`) fed one [`DragEvent`] at a time.
//! Handlers only read the stores and return the [`DragAction`] to perform;
//! [`DragAction::apply`] carries it out. Unknown ids never raise: a stale id
//! (for example a task deleted mid-drag) simply yields no action.
//!
//! | state    | event | effect                                                  |
//! |----------|-------|---------------------------------------------------------|
//! | Idle     | Start | classify as column or task, enter Dragging              |
//! | Dragging | Over  | task over a task in the same column: live reorder       |
//! | Dragging | End   | column: reorder columns; task: move on cross-column drop|
//! | any      | End   | back to Idle                                            |

use crate::column::ColumnStore;
use crate::ordering;
use crate::task::TaskStore;
use crate::types::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// What is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragKind {
    Task,
    Column,
}

/// Controller state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        active_id: String,
        kind: DragKind,
    },
}

/// Pointer lifecycle events. `over` is the id under the pointer: a task id,
/// a column id, or `None` when there is no valid target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DragEvent {
    Start { id: String },
    Over { over: Option<String> },
    End { over: Option<String> },
}

impl DragEvent {
    pub fn start(id: impl Into<String>) -> Self {
        Self::Start { id: id.into() }
    }

    pub fn over(over: impl Into<String>) -> Self {
        Self::Over {
            over: Some(over.into()),
        }
    }

    pub fn end(over: impl Into<String>) -> Self {
        Self::End {
            over: Some(over.into()),
        }
    }

    /// Released with no drop target
    pub fn cancel() -> Self {
        Self::End { over: None }
    }
}

/// A store mutation decided by the controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DragAction {
    ReorderTasks {
        status: ColumnId,
        ordered_ids: Vec<TaskId>,
    },
    MoveTask {
        id: TaskId,
        status: ColumnId,
        order: i64,
    },
    ReorderColumns {
        ordered_ids: Vec<ColumnId>,
    },
}

impl DragAction {
    /// Perform the mutation on the owning store
    pub fn apply(&self, tasks: &mut TaskStore, columns: &mut ColumnStore) {
        if self.touches_tasks() {
            self.apply_to_tasks(tasks);
        } else {
            self.apply_to_columns(columns);
        }
    }

    /// Apply a task action. Returns how many tasks were re-ranked or moved;
    /// column actions are ignored and return 0.
    pub fn apply_to_tasks(&self, tasks: &mut TaskStore) -> usize {
        match self {
            Self::ReorderTasks {
                status,
                ordered_ids,
            } => tasks.reorder_tasks(status, ordered_ids),
            Self::MoveTask { id, status, order } => {
                usize::from(tasks.move_task(id, status.clone(), *order))
            }
            Self::ReorderColumns { .. } => 0,
        }
    }

    /// Apply a column action. Returns the number of columns dropped.
    pub fn apply_to_columns(&self, columns: &mut ColumnStore) -> usize {
        match self {
            Self::ReorderColumns { ordered_ids } => columns.reorder_columns(ordered_ids),
            _ => 0,
        }
    }

    /// True if the action mutates the Task Store
    pub fn touches_tasks(&self) -> bool {
        !matches!(self, Self::ReorderColumns { .. })
    }
}

/// Interprets drag gestures into store operations
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Active id and kind while dragging
    pub fn active(&self) -> Option<(&str, DragKind)> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging { active_id, kind } => Some((active_id.as_str(), *kind)),
        }
    }

    /// Feed one event. Returns the action to apply, if any.
    pub fn handle(
        &mut self,
        event: &DragEvent,
        tasks: &TaskStore,
        columns: &ColumnStore,
    ) -> Option<DragAction> {
        match event {
            DragEvent::Start { id } => {
                self.drag_start(id, columns);
                None
            }
            DragEvent::Over { over } => self.drag_over(over.as_deref(), tasks),
            DragEvent::End { over } => self.drag_end(over.as_deref(), tasks, columns),
        }
    }

    /// Begin a gesture. The dragged id is a column if it names one, otherwise a task.
    pub fn drag_start(&mut self, id: &str, columns: &ColumnStore) {
        let kind = if columns.contains(&ColumnId::from(id)) {
            DragKind::Column
        } else {
            DragKind::Task
        };
        if let DragState::Dragging { active_id, .. } = &self.state {
            tracing::trace!(previous = %active_id, "drag restarted before previous gesture ended");
        }
        tracing::trace!(active = id, ?kind, "drag start");
        self.state = DragState::Dragging {
            active_id: id.to_string(),
            kind,
        };
    }

    /// Pointer moved over `over`. Only a task hovering another task of its
    /// own column produces an action: the live reorder preview.
    pub fn drag_over(&self, over: Option<&str>, tasks: &TaskStore) -> Option<DragAction> {
        let (active_id, kind) = self.active()?;
        let over = over?;
        if kind != DragKind::Task || active_id == over {
            return None;
        }

        let active = tasks.get(&TaskId::from(active_id))?;
        let target = tasks.get(&TaskId::from(over))?;
        if active.status != target.status {
            // Cross-column moves are committed on drop
            return None;
        }

        let current = tasks.column_sequence(&active.status);
        let from = current.iter().position(|id| id == &active.id)?;
        let to = current.iter().position(|id| id == &target.id)?;
        if from == to {
            return None;
        }

        let mut reordered = current;
        ordering::array_move(&mut reordered, from, to);
        tracing::trace!(active = active_id, over, from, to, "live reorder");

        Some(DragAction::ReorderTasks {
            status: active.status.clone(),
            ordered_ids: reordered,
        })
    }

    /// Release. Always returns the controller to `Idle`.
    pub fn drag_end(
        &mut self,
        over: Option<&str>,
        tasks: &TaskStore,
        columns: &ColumnStore,
    ) -> Option<DragAction> {
        let DragState::Dragging { active_id, kind } = std::mem::take(&mut self.state) else {
            tracing::trace!("drag end ignored: no active gesture");
            return None;
        };
        let Some(over) = over else {
            tracing::trace!(active = %active_id, "drag cancelled: no drop target");
            return None;
        };

        let action = match kind {
            DragKind::Column => Self::drop_column(&active_id, over, columns),
            DragKind::Task => Self::drop_task(&active_id, over, tasks, columns),
        };
        tracing::trace!(active = %active_id, over, ?action, "drag end");
        action
    }

    fn drop_column(active_id: &str, over: &str, columns: &ColumnStore) -> Option<DragAction> {
        let mut ids = columns.ids();
        let from = columns.index_of(&ColumnId::from(active_id))?;
        let to = columns.index_of(&ColumnId::from(over))?;
        if from == to {
            return None;
        }
        ordering::array_move(&mut ids, from, to);
        Some(DragAction::ReorderColumns { ordered_ids: ids })
    }

    fn drop_task(
        active_id: &str,
        over: &str,
        tasks: &TaskStore,
        columns: &ColumnStore,
    ) -> Option<DragAction> {
        let active = tasks.get(&TaskId::from(active_id))?;

        // Dropped on a column: append to its end
        let over_column = ColumnId::from(over);
        if columns.contains(&over_column) {
            let order = tasks
                .column_tasks(&over_column)
                .iter()
                .filter(|t| t.id != active.id)
                .count() as i64;
            return Some(DragAction::MoveTask {
                id: active.id.clone(),
                status: over_column,
                order,
            });
        }

        // Dropped on a task in another column: take its slot. Same-column
        // drops were already applied during drag-over.
        let target = tasks.get(&TaskId::from(over))?;
        if target.status == active.status {
            return None;
        }
        Some(DragAction::MoveTask {
            id: active.id.clone(),
            status: target.status.clone(),
            order: target.order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::test_support::task;
    use crate::types::Column;

    fn stores() -> (TaskStore, ColumnStore) {
        let tasks = TaskStore::with_tasks(vec![
            task("a", "todo", 0),
            task("b", "todo", 1),
            task("c", "todo", 2),
            task("x", "done", 0),
        ]);
        (tasks, ColumnStore::new())
    }

    #[test]
    fn test_start_classifies_column_and_task() {
        let (_, columns) = stores();
        let mut controller = DragController::new();

        controller.drag_start("done", &columns);
        assert_eq!(controller.active(), Some(("done", DragKind::Column)));

        controller.drag_start("a", &columns);
        assert_eq!(controller.active(), Some(("a", DragKind::Task)));
    }

    #[test]
    fn test_over_same_column_reorders() {
        let (tasks, columns) = stores();
        let mut controller = DragController::new();
        controller.drag_start("c", &columns);

        let action = controller.drag_over(Some("a"), &tasks).unwrap();
        assert_eq!(
            action,
            DragAction::ReorderTasks {
                status: "todo".into(),
                ordered_ids: vec!["c".into(), "a".into(), "b".into()],
            }
        );
    }

    #[test]
    fn test_over_ignored_cases() {
        let (tasks, columns) = stores();
        let mut controller = DragController::new();

        // Idle
        assert!(controller.drag_over(Some("a"), &tasks).is_none());

        controller.drag_start("a", &columns);
        assert!(controller.drag_over(None, &tasks).is_none());
        assert!(controller.drag_over(Some("a"), &tasks).is_none());
        // Other column's task
        assert!(controller.drag_over(Some("x"), &tasks).is_none());
        // Column itself
        assert!(controller.drag_over(Some("done"), &tasks).is_none());

        controller.drag_start("todo", &columns);
        assert!(controller.drag_over(Some("in-progress"), &tasks).is_none());
    }

    #[test]
    fn test_end_on_column_appends() {
        let (tasks, columns) = stores();
        let mut controller = DragController::new();
        controller.drag_start("a", &columns);

        let action = controller.drag_end(Some("done"), &tasks, &columns);
        assert_eq!(
            action,
            Some(DragAction::MoveTask {
                id: "a".into(),
                status: "done".into(),
                order: 1,
            })
        );
        assert_eq!(controller.state(), &DragState::Idle);
    }

    #[test]
    fn test_end_on_own_column_appends_without_gap() {
        let (tasks, columns) = stores();
        let mut controller = DragController::new();
        controller.drag_start("a", &columns);

        let action = controller.drag_end(Some("todo"), &tasks, &columns);
        assert_eq!(
            action,
            Some(DragAction::MoveTask {
                id: "a".into(),
                status: "todo".into(),
                order: 2,
            })
        );
    }

    #[test]
    fn test_end_on_task_in_other_column_takes_slot() {
        let (tasks, columns) = stores();
        let mut controller = DragController::new();
        controller.drag_start("b", &columns);

        let action = controller.drag_end(Some("x"), &tasks, &columns);
        assert_eq!(
            action,
            Some(DragAction::MoveTask {
                id: "b".into(),
                status: "done".into(),
                order: 0,
            })
        );
    }

    #[test]
    fn test_end_on_task_in_same_column_does_nothing() {
        let (tasks, columns) = stores();
        let mut controller = DragController::new();
        controller.drag_start("b", &columns);
        assert!(controller.drag_end(Some("a"), &tasks, &columns).is_none());
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_end_column_on_column() {
        let (tasks, columns) = stores();
        let mut controller = DragController::new();
        controller.drag_start("todo", &columns);

        let action = controller.drag_end(Some("done"), &tasks, &columns);
        assert_eq!(
            action,
            Some(DragAction::ReorderColumns {
                ordered_ids: vec!["in-progress".into(), "done".into(), "todo".into()],
            })
        );
    }

    #[test]
    fn test_end_column_on_task_or_itself_does_nothing() {
        let (tasks, columns) = stores();
        let mut controller = DragController::new();

        controller.drag_start("todo", &columns);
        assert!(controller.drag_end(Some("a"), &tasks, &columns).is_none());

        controller.drag_start("todo", &columns);
        let action = controller.drag_end(Some("todo"), &tasks, &columns);
        assert!(action.is_none());
    }

    #[test]
    fn test_cancel_and_stale_ids() {
        let (tasks, columns) = stores();
        let mut controller = DragController::new();

        controller.drag_start("a", &columns);
        assert!(controller.drag_end(None, &tasks, &columns).is_none());
        assert!(!controller.is_dragging());

        controller.drag_start("deleted-task", &columns);
        assert!(controller.drag_over(Some("a"), &tasks).is_none());
        let action = controller.drag_end(Some("done"), &tasks, &columns);
        assert!(action.is_none());

        // End while idle
        let action = controller.drag_end(Some("done"), &tasks, &columns);
        assert!(action.is_none());
    }

    #[test]
    fn test_handle_dispatches_events() {
        let (mut tasks, mut columns) = stores();
        let mut controller = DragController::new();

        for event in [DragEvent::start("a"), DragEvent::over("c")] {
            if let Some(action) = controller.handle(&event, &tasks, &columns) {
                action.apply(&mut tasks, &mut columns);
            }
        }
        assert_eq!(
            tasks.column_sequence(&"todo".into()),
            vec![TaskId::from("b"), TaskId::from("c"), TaskId::from("a")]
        );

        let end = controller.handle(&DragEvent::end("c"), &tasks, &columns);
        assert!(end.is_none());
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_column_drag_with_custom_columns() {
        let tasks = TaskStore::new();
        let columns = ColumnStore::with_columns(vec![
            Column::new("a", "A", "todo"),
            Column::new("b", "B", "todo"),
        ]);
        let mut controller = DragController::new();
        controller.drag_start("b", &columns);
        let action = controller.drag_end(Some("a"), &tasks, &columns).unwrap();
        assert!(!action.touches_tasks());
    }

    #[test]
    fn test_event_serde() {
        let json = serde_json::to_value(DragEvent::end("done")).unwrap();
        assert_eq!(json["type"], "end");
        assert_eq!(json["over"], "done");
        let parsed: DragEvent = serde_json::from_str(r#"{"type":"start","id":"a"}"#).unwrap();
        assert_eq!(parsed, DragEvent::start("a"));
    }
}
