//! KanbanBoard: the application context.
//!
//! Owns the three persisted stores and the drag controller. Every mutation
//! goes through the owning store's [`Persisted`] wrapper, so each change is
//! saved once it has been applied.

use crate::auth::{AuthStore, User};
use crate::column::ColumnStore;
use crate::config::BoardConfig;
use crate::drag::{DragAction, DragController, DragEvent};
use crate::error::Result;
use crate::ordering;
use crate::persist::{FileStorage, Persisted, StateStorage};
use crate::task::TaskStore;
use crate::types::{ColumnId, ColumnUpdate, StatusFilter, Task, TaskId, TaskUpdate};

/// A board bound to one storage backend
#[derive(Debug)]
pub struct KanbanBoard<S> {
    tasks: Persisted<TaskStore, S>,
    columns: Persisted<ColumnStore, S>,
    auth: Persisted<AuthStore, S>,
    drag: DragController,
}

impl KanbanBoard<FileStorage> {
    /// Open the board stored in `config.data_dir`
    pub fn open(config: &BoardConfig) -> Self {
        tracing::debug!(data_dir = %config.data_dir.display(), "opening board");
        Self::new(FileStorage::new(config.data_dir.clone()), config)
    }
}

impl<S: StateStorage + Clone> KanbanBoard<S> {
    /// Load every store from `storage`
    pub fn new(storage: S, config: &BoardConfig) -> Self {
        let color = config.default_column_color.clone();
        let mut columns = Persisted::<ColumnStore, S>::load(storage.clone());
        columns.configure(|c| c.set_default_color(color));

        Self {
            tasks: Persisted::load(storage.clone()),
            columns,
            auth: Persisted::load(storage),
            drag: DragController::new(),
        }
    }

    pub fn tasks(&self) -> &TaskStore {
        self.tasks.get()
    }

    pub fn columns(&self) -> &ColumnStore {
        self.columns.get()
    }

    pub fn auth(&self) -> &AuthStore {
        self.auth.get()
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Save every store whose snapshot changed since it was last written,
    /// returning the first failure
    pub fn save(&mut self) -> Result<()> {
        self.tasks.save()?;
        self.columns.save()?;
        self.auth.save()
    }

    /// Write every store, changed or not, returning the first failure
    pub fn flush(&self) -> Result<()> {
        self.tasks.flush()?;
        self.columns.flush()?;
        self.auth.flush()
    }

    // Task Store

    pub fn add_task(&mut self, title: &str, status: impl Into<ColumnId>) -> Result<TaskId> {
        let status = status.into();
        self.tasks.update(|t| t.add_task(title, status))
    }

    pub fn update_task(&mut self, id: &TaskId, update: &TaskUpdate) -> bool {
        self.tasks.update(|t| t.update_task(id, update))
    }

    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        self.tasks.update(|t| t.delete_task(id))
    }

    pub fn move_task(
        &mut self,
        id: &TaskId,
        new_status: impl Into<ColumnId>,
        new_order: i64,
    ) -> bool {
        let new_status = new_status.into();
        self.tasks
            .update(|t| t.move_task(id, new_status, new_order))
    }

    pub fn reorder_tasks(&mut self, status: &ColumnId, ordered_ids: &[TaskId]) -> usize {
        self.tasks.update(|t| t.reorder_tasks(status, ordered_ids))
    }

    pub fn toggle_task_complete(&mut self, id: &TaskId) -> bool {
        self.tasks.update(|t| t.toggle_task_complete(id))
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.tasks.update(|t| t.set_filter(text));
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.tasks.update(|t| t.set_status_filter(status));
    }

    /// Tasks of `status` passing both filters, in display order
    pub fn visible_tasks(&self, status: &ColumnId) -> Vec<&Task> {
        self.tasks.get().visible_tasks(status)
    }

    // Column Store

    pub fn add_column(&mut self, title: &str) -> Result<ColumnId> {
        self.columns.update(|c| c.add_column(title))
    }

    pub fn update_column(&mut self, id: &ColumnId, update: &ColumnUpdate) -> bool {
        self.columns.update(|c| c.update_column(id, update))
    }

    pub fn delete_column(&mut self, id: &ColumnId) -> bool {
        self.columns.update(|c| c.delete_column(id))
    }

    pub fn reorder_columns(&mut self, new_order: &[ColumnId]) -> usize {
        self.columns.update(|c| c.reorder_columns(new_order))
    }

    // Auth Store

    pub fn login(&mut self, email: &str, password: &str, name: Option<&str>) -> User {
        self.auth.update(|a| a.login(email, password, name).clone())
    }

    pub fn register(&mut self, email: &str, password: &str, name: &str) -> User {
        self.auth
            .update(|a| a.register(email, password, name).clone())
    }

    pub fn logout(&mut self) {
        self.auth.update(|a| a.logout());
    }

    // Drag-Interaction Controller

    /// Feed one pointer event to the controller and apply whatever it decides.
    /// Returns the applied action.
    pub fn handle_drag(&mut self, event: DragEvent) -> Option<DragAction> {
        let action = self
            .drag
            .handle(&event, self.tasks.get(), self.columns.get())?;

        if action.touches_tasks() {
            self.tasks.update(|t| action.apply_to_tasks(t));
            if let DragAction::ReorderTasks { status, .. } = &action {
                debug_assert!(ordering::is_dense(self.tasks.get().tasks(), status));
            }
        } else {
            self.columns.update(|c| action.apply_to_columns(c));
        }
        Some(action)
    }
}
