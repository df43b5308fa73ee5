//! Strongly typed identifiers for tasks and columns.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier string
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the inner string value
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&$name> for $name {
            fn from(id: &$name) -> Self {
                id.clone()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id!(
    /// Unique, stable task identifier (a ULID for tasks created here)
    TaskId
);

string_id!(
    /// Column identifier. Tasks reference columns through this id.
    ColumnId
);

impl TaskId {
    /// Generate a fresh task id
    pub fn new() -> Self {
        Self(Ulid::new().to_string())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnId {
    /// Generate a fresh column id: a `column-` prefix followed by a ULID,
    /// which is time-ordered with an 80-bit random suffix.
    pub fn generate() -> Self {
        Self(format!("column-{}", Ulid::new().to_string().to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_ids_are_unique() {
        let a = TaskId::new();
        let b = TaskId::new();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 26);
    }

    #[test]
    fn test_generated_column_id_shape() {
        let id = ColumnId::generate();
        assert!(id.as_str().starts_with("column-"));
        assert_ne!(id, ColumnId::generate());
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let id = ColumnId::from_string("todo");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"todo\"");
        let parsed: ColumnId = serde_json::from_str("\"done\"").unwrap();
        assert_eq!(parsed, "done");
    }
}
