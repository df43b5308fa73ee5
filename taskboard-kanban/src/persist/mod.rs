//! Snapshot persistence for the stores
//!
//! Each store is saved whole, as JSON, under its own namespace of a
//! [`StateStorage`]. Loading tolerates a missing or unreadable snapshot by
//! starting from the store's initial state.

mod persisted;
mod snapshot;
mod storage;

pub use persisted::Persisted;
pub use snapshot::{decode, encode, Snapshot, SNAPSHOT_VERSION};
pub use storage::{FileStorage, MemoryStorage, StateStorage};

use crate::column::ColumnStore;
use crate::task::TaskStore;

impl Snapshot for TaskStore {
    const NAMESPACE: &'static str = "kanban-storage";
}

impl Snapshot for ColumnStore {
    const NAMESPACE: &'static str = "board-storage";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_store_snapshot_fields() {
        let mut store = TaskStore::new();
        store.add_task("Write spec", "todo").unwrap();
        store.set_filter("spec");

        let value: serde_json::Value = serde_json::from_str(&encode(&store).unwrap()).unwrap();
        assert_eq!(value["version"], 0);
        assert_eq!(value["state"]["filter"], "spec");
        assert_eq!(value["state"]["statusFilter"], "all");
        assert_eq!(value["state"]["tasks"][0]["title"], "Write spec");
        assert_eq!(value["state"]["tasks"][0]["order"], 0);
        assert!(value["state"]["tasks"][0]["createdAt"].is_string());
    }

    #[test]
    fn test_column_store_defaults_when_columns_missing() {
        let store: ColumnStore = decode(r#"{"state":{},"version":0}"#).unwrap();
        assert_eq!(store, ColumnStore::new());
    }
}
