//! Key-value backends for store snapshots

use crate::error::{KanbanError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

/// Durable key-value storage, one string value per namespace
pub trait StateStorage {
    /// Read the snapshot stored under `namespace`, if any
    fn load(&self, namespace: &str) -> Result<Option<String>>;

    /// Replace the snapshot stored under `namespace`
    fn save(&self, namespace: &str, contents: &str) -> Result<()>;
}

/// In-process storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A panic while holding the lock cannot leave a half-written entry
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Seed a raw value, bypassing serialization
    pub fn insert(&self, namespace: impl Into<String>, contents: impl Into<String>) {
        self.entries().insert(namespace.into(), contents.into());
    }

    /// Raw value currently stored under `namespace`
    pub fn get(&self, namespace: &str) -> Option<String> {
        self.entries().get(namespace).cloned()
    }

    pub fn namespaces(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries().keys().cloned().collect();
        names.sort();
        names
    }
}

impl StateStorage for MemoryStorage {
    fn load(&self, namespace: &str) -> Result<Option<String>> {
        Ok(self.get(namespace))
    }

    fn save(&self, namespace: &str, contents: &str) -> Result<()> {
        self.insert(namespace, contents);
        Ok(())
    }
}

/// Storage backed by one JSON file per namespace in a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `root`. The directory is created on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `namespace`
    pub fn path_for(&self, namespace: &str) -> PathBuf {
        self.root.join(format!("{namespace}.json"))
    }
}

impl StateStorage for FileStorage {
    fn load(&self, namespace: &str) -> Result<Option<String>> {
        let path = self.path_for(namespace);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KanbanError::storage(
                namespace,
                format!("failed to read {}: {e}", path.display()),
            )),
        }
    }

    fn save(&self, namespace: &str, contents: &str) -> Result<()> {
        let path = self.path_for(namespace);
        atomic_write(&path, contents.as_bytes()).map_err(|e| {
            let message = format!("failed to write {}: {e}", path.display());
            KanbanError::storage(namespace, message)
        })
    }
}

/// Atomic write via temp file and rename
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    std::fs::write(&temp_path, content)?;

    // Rename is atomic on the same filesystem
    std::fs::rename(&temp_path, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_storage_shared_between_clones() {
        let storage = MemoryStorage::new();
        let clone = storage.clone();

        storage.save("board-storage", "{}").unwrap();
        assert_eq!(clone.load("board-storage").unwrap().as_deref(), Some("{}"));
        assert_eq!(clone.load("missing").unwrap(), None);
        assert_eq!(storage.namespaces(), vec!["board-storage".to_string()]);
    }

    #[test]
    fn test_file_storage_round_trip() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().join("nested").join("data"));

        assert_eq!(storage.load("kanban-storage").unwrap(), None);

        storage.save("kanban-storage", r#"{"state":{}}"#).unwrap();
        assert_eq!(
            storage.load("kanban-storage").unwrap().as_deref(),
            Some(r#"{"state":{}}"#)
        );
        assert!(storage.path_for("kanban-storage").exists());
        assert!(!storage.root().join("kanban-storage.json.tmp").exists());
    }

    #[test]
    fn test_file_storage_overwrites() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path());

        storage.save("auth-storage", "first").unwrap();
        storage.save("auth-storage", "second").unwrap();
        let loaded = storage.load("auth-storage").unwrap();
        assert_eq!(loaded.as_deref(), Some("second"));
    }

    #[test]
    fn test_file_storage_unreadable_path_is_storage_error() {
        let temp = TempDir::new().unwrap();
        // A directory where the file should be
        std::fs::create_dir_all(temp.path().join("board-storage.json")).unwrap();
        let storage = FileStorage::new(temp.path());

        let err = storage.load("board-storage").unwrap_err();
        assert!(matches!(err, KanbanError::Storage { .. }));
    }
}
