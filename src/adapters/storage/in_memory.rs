//! In-memory state store for tests and single-process setups.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::ports::{StateStore, StateStoreError};

/// Key/value store backed by a process-local map. Nothing survives a
/// restart; use [`super::FileStateStore`] for durable state.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StateStore for InMemoryStateStore {
    fn get(&self, key: &str) -> Result<Option<String>, StateStoreError> {
        Ok(self
            .entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StateStoreError> {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StateStoreError> {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_of_unwritten_key_is_none() {
        let store = InMemoryStateStore::new();
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn put_then_get_round_trips() {
        let store = InMemoryStateStore::new();
        store.put("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn put_replaces_previous_value() {
        let store = InMemoryStateStore::new();
        store.put("k", "v1").unwrap();
        store.put("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn remove_is_idempotent() {
        let store = InMemoryStateStore::new();
        store.put("k", "v").unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        assert!(store.is_empty());
    }
}
