//! Persistence decorator around a store

use super::snapshot::{self, Snapshot};
use super::storage::StateStorage;
use crate::error::Result;

/// A store paired with the storage it is saved to.
///
/// The in-memory state is authoritative. [`Persisted::update`] writes a full
/// snapshot whenever the mutation changed it; a failed write is logged, the
/// mutation stands, and the next save retries.
#[derive(Debug)]
pub struct Persisted<T, S> {
    state: T,
    storage: S,
    /// Snapshot known to match storage; `None` when storage could not be
    /// read back
    saved: Option<String>,
}

impl<T: Snapshot, S: StateStorage> Persisted<T, S> {
    /// Load `T` from `storage`, falling back to `T::default()` when nothing
    /// is stored or the stored snapshot cannot be read.
    pub fn load(storage: S) -> Self {
        let (state, saved) = match storage.load(T::NAMESPACE) {
            Ok(Some(contents)) => match snapshot::decode::<T>(&contents) {
                Ok(state) => {
                    let saved = snapshot::encode(&state).ok();
                    (state, saved)
                }
                Err(e) => {
                    tracing::warn!(
                        namespace = T::NAMESPACE,
                        error = %e,
                        "discarding unreadable snapshot; starting from initial state"
                    );
                    (T::default(), None)
                }
            },
            Ok(None) => {
                tracing::debug!(
                    namespace = T::NAMESPACE,
                    "no snapshot; starting from initial state"
                );
                // Nothing stored reads back as the initial state
                let state = T::default();
                let saved = snapshot::encode(&state).ok();
                (state, saved)
            }
            Err(e) => {
                tracing::warn!(
                    namespace = T::NAMESPACE,
                    error = %e,
                    "could not read snapshot; starting from initial state"
                );
                (T::default(), None)
            }
        };
        Self {
            state,
            storage,
            saved,
        }
    }

    pub fn get(&self) -> &T {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Change in-memory settings that are not part of the snapshot.
    /// Nothing is written.
    pub fn configure(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.state);
    }

    /// Apply `f` to the state, then save if the snapshot changed. Returns
    /// what `f` returns.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.state);
        if let Err(e) = self.save() {
            tracing::warn!(namespace = T::NAMESPACE, error = %e, "failed to save snapshot");
        }
        result
    }

    /// Write the state if it differs from what storage is known to hold
    pub fn save(&mut self) -> Result<()> {
        let contents = snapshot::encode(&self.state)?;
        if self.saved.as_deref() == Some(contents.as_str()) {
            tracing::trace!(namespace = T::NAMESPACE, "snapshot unchanged");
            return Ok(());
        }
        self.storage.save(T::NAMESPACE, &contents)?;
        self.saved = Some(contents);
        Ok(())
    }

    /// Write the current state to storage unconditionally
    pub fn flush(&self) -> Result<()> {
        let contents = snapshot::encode(&self.state)?;
        self.storage.save(T::NAMESPACE, &contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KanbanError;
    use crate::persist::MemoryStorage;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Notes {
        #[serde(default)]
        items: Vec<String>,
    }

    impl Snapshot for Notes {
        const NAMESPACE: &'static str = "notes";
    }

    /// Storage whose writes always fail
    struct ReadOnly;

    impl StateStorage for ReadOnly {
        fn load(&self, _namespace: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn save(&self, namespace: &str, _contents: &str) -> Result<()> {
            Err(KanbanError::storage(namespace, "read-only"))
        }
    }

    #[test]
    fn test_update_saves_snapshot() {
        let storage = MemoryStorage::new();
        let mut notes: Persisted<Notes, _> = Persisted::load(storage.clone());
        assert!(notes.get().items.is_empty());

        let len = notes.update(|n| {
            n.items.push("first".into());
            n.items.len()
        });
        assert_eq!(len, 1);

        let reloaded: Persisted<Notes, _> = Persisted::load(storage);
        assert_eq!(reloaded.get().items, vec!["first".to_string()]);
    }

    #[test]
    fn test_noop_update_does_not_write() {
        let storage = MemoryStorage::new();
        let mut notes: Persisted<Notes, _> = Persisted::load(storage.clone());

        let found = notes.update(|n| n.items.iter().any(|i| i == "missing"));
        assert!(!found);
        assert_eq!(storage.get("notes"), None);

        notes.update(|n| n.items.push("first".into()));
        let written = storage.get("notes");
        assert!(written.is_some());

        // Unchanged state leaves storage alone
        storage.insert("notes", "sentinel");
        notes.update(|n| n.items.retain(|i| i != "missing"));
        assert_eq!(storage.get("notes").as_deref(), Some("sentinel"));
    }

    #[test]
    fn test_loaded_snapshot_is_not_rewritten() {
        let storage = MemoryStorage::new();
        storage.insert("notes", r#"{"state":{"items":["a"]},"version":0}"#);
        let mut notes: Persisted<Notes, _> = Persisted::load(storage.clone());

        storage.insert("notes", "sentinel");
        notes.update(|n| n.items.len());
        assert_eq!(storage.get("notes").as_deref(), Some("sentinel"));
    }

    #[test]
    fn test_corrupt_snapshot_is_rewritten_by_any_update() {
        let storage = MemoryStorage::new();
        storage.insert("notes", "{{{");
        let mut notes: Persisted<Notes, _> = Persisted::load(storage.clone());

        notes.update(|n| n.items.len());
        let reloaded: Persisted<Notes, _> = Persisted::load(storage);
        assert_eq!(reloaded.get(), &Notes::default());
        assert!(reloaded.saved.is_some());
    }

    #[test]
    fn test_corrupt_snapshot_falls_back_to_default() {
        let storage = MemoryStorage::new();
        storage.insert("notes", "{{{");
        let notes: Persisted<Notes, _> = Persisted::load(storage);
        assert_eq!(notes.get(), &Notes::default());
    }

    #[test]
    fn test_failed_save_keeps_mutation() {
        let mut notes: Persisted<Notes, _> = Persisted::load(ReadOnly);
        notes.update(|n| n.items.push("kept".into()));
        assert_eq!(notes.get().items.len(), 1);
        assert!(notes.save().is_err());
        assert!(notes.flush().is_err());
    }
}
