//! Presentation filters stored alongside the task collection

use super::ids::ColumnId;
use super::task::Task;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Restricts the visible tasks to one column, or shows all of them.
/// Serialized as `"all"` or the column id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Column(ColumnId),
}

impl StatusFilter {
    pub fn parse(s: &str) -> Self {
        match s {
            "all" => Self::All,
            other => Self::Column(ColumnId::from_string(other)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Column(id) => id.as_str(),
        }
    }

    pub fn matches(&self, status: &ColumnId) -> bool {
        match self {
            Self::All => true,
            Self::Column(id) => id == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StatusFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StatusFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// True if the task title contains `text`, ignoring case. Empty text matches everything.
pub fn title_matches(task: &Task, text: &str) -> bool {
    text.is_empty() || task.title.to_lowercase().contains(&text.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!(StatusFilter::parse("all"), StatusFilter::All);
        assert_eq!(
            StatusFilter::parse("done"),
            StatusFilter::Column(ColumnId::from_string("done"))
        );
        assert_eq!(StatusFilter::parse("done").to_string(), "done");
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&StatusFilter::All).unwrap();
        assert_eq!(json, "\"all\"");
        let parsed: StatusFilter = serde_json::from_str("\"todo\"").unwrap();
        assert!(parsed.matches(&ColumnId::from_string("todo")));
        assert!(!parsed.matches(&ColumnId::from_string("done")));
    }

    #[test]
    fn test_title_matches_case_insensitive() {
        let task = Task::new("Write Spec", "todo", 0);
        assert!(title_matches(&task, ""));
        assert!(title_matches(&task, "spec"));
        assert!(title_matches(&task, "WRITE"));
        assert!(!title_matches(&task, "review"));
    }
}
