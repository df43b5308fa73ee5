//! Text and status filters

use super::TaskStore;
use crate::types::StatusFilter;

impl TaskStore {
    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn status_filter(&self) -> &StatusFilter {
        &self.status_filter
    }

    /// Set the free-text title filter. Stored verbatim.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.status_filter = status;
    }
}
