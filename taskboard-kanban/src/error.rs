//! Error types for the kanban engine
//!
//! Missing tasks or columns are deliberately absent from this enum: operations
//! that reference an unknown id are no-ops, not failures.

use thiserror::Error;

/// Result type for kanban operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur in kanban operations
#[derive(Debug, Error)]
pub enum KanbanError {
    /// A task or column title was empty after trimming
    #[error("{entity} title must not be empty")]
    EmptyTitle { entity: &'static str },

    /// A storage backend could not read or write a snapshot
    #[error("storage error for '{namespace}': {message}")]
    Storage { namespace: String, message: String },

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KanbanError {
    /// Create an empty title error for the given entity kind
    pub fn empty_title(entity: &'static str) -> Self {
        Self::EmptyTitle { entity }
    }

    /// Create a storage error
    pub fn storage(namespace: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Storage {
            namespace: namespace.into(),
            message: message.into(),
        }
    }

    /// Check if this error was caused by invalid caller input
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyTitle { .. })
    }
}

impl From<figment::Error> for KanbanError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
