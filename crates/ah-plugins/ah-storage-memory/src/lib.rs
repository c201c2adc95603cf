//! # ah-storage-memory
//!
//! In-process implementation of `KeyValueStore`.
//! Handles are cheap to clone and all clones share one map, which makes this
//! the stand-in for a browser's local storage in tests and in the
//! `memory` backend.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use ah_core::error::StorageError;
use ah_core::traits::KeyValueStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

fn poisoned<E>(_: E) -> StorageError {
    StorageError::Backend("memory store lock poisoned".into())
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.entries.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let map = self.entries.read().map_err(poisoned)?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        tracing::trace!(key, bytes = value.len(), "memory set");
        let mut map = self.entries.write().map_err(poisoned)?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut map = self.entries.write().map_err(poisoned)?;
        map.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryKeyValueStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "[1,2]").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[1,2]"));

        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let a = MemoryKeyValueStore::new();
        let b = a.clone();
        a.set("seeded", "true").unwrap();
        assert_eq!(b.get("seeded").unwrap().as_deref(), Some("true"));
        assert_eq!(b.len(), 1);
    }
}
