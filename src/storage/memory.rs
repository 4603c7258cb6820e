//! In-memory key-value storage.

use std::sync::{Mutex, PoisonError};

use rustc_hash::FxHashMap;

use super::{KeyValueStore, StorageError};

/// Keeps payloads in a map. Useful for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<FxHashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, namespace: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        Ok(entries.get(namespace).cloned())
    }

    fn save(&self, namespace: &str, payload: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        entries.insert(namespace.to_string(), payload.to_string());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn save_then_load_returns_payload() -> TestResult {
        let storage = MemoryStore::new();

        storage.save("ns", "payload")?;

        assert_eq!(storage.load("ns")?, Some("payload".to_string()));

        Ok(())
    }

    #[test]
    fn namespaces_are_independent() -> TestResult {
        let storage = MemoryStore::new();

        storage.save("a", "1")?;
        storage.save("b", "2")?;

        assert_eq!(storage.load("a")?, Some("1".to_string()));
        assert_eq!(storage.load("b")?, Some("2".to_string()));

        Ok(())
    }
}
