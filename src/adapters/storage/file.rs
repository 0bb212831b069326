//! File-backed state store.
//!
//! Persists each key as one small file under a base directory, which is
//! all the session record needs: two short string values that must
//! survive a restart. Keys are restricted to a safe character set so a
//! key can never escape the base directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::ports::{StateStore, StateStoreError};

/// Key/value store writing one file per key under a base directory.
#[derive(Debug, Clone)]
pub struct FileStateStore {
    base_path: PathBuf,
}

impl FileStateStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory is created lazily on the first write.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, StateStoreError> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid {
            return Err(StateStoreError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(key))
    }
}

impl StateStore for FileStateStore {
    fn get(&self, key: &str) -> Result<Option<String>, StateStoreError> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StateStoreError::Io(err.to_string())),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StateStoreError> {
        let path = self.key_path(key)?;
        fs::create_dir_all(&self.base_path).map_err(|e| StateStoreError::Io(e.to_string()))?;
        fs::write(&path, value).map_err(|e| StateStoreError::Io(e.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StateStoreError> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StateStoreError::Io(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (FileStateStore, TempDir) {
        let dir = TempDir::new().unwrap();
        (FileStateStore::new(dir.path()), dir)
    }

    #[test]
    fn get_of_unwritten_key_is_none() {
        let (store, _dir) = store();
        assert_eq!(store.get("session.user").unwrap(), None);
    }

    #[test]
    fn put_then_get_round_trips() {
        let (store, _dir) = store();
        store.put("session.user", "{\"id\":\"u-1\"}").unwrap();
        assert_eq!(
            store.get("session.user").unwrap().as_deref(),
            Some("{\"id\":\"u-1\"}")
        );
    }

    #[test]
    fn values_survive_a_new_store_instance() {
        let dir = TempDir::new().unwrap();
        {
            let store = FileStateStore::new(dir.path());
            store.put("session.membership_valid", "true").unwrap();
        }
        let reopened = FileStateStore::new(dir.path());
        assert_eq!(
            reopened.get("session.membership_valid").unwrap().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn remove_is_idempotent() {
        let (store, _dir) = store();
        store.put("k", "v").unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn path_traversal_keys_are_rejected() {
        let (store, _dir) = store();
        assert!(matches!(
            store.put("../escape", "v"),
            Err(StateStoreError::InvalidKey(_))
        ));
        assert!(matches!(
            store.get("a/b"),
            Err(StateStoreError::InvalidKey(_))
        ));
        assert!(matches!(
            store.remove(""),
            Err(StateStoreError::InvalidKey(_))
        ));
    }

    #[test]
    fn missing_base_directory_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStateStore::new(dir.path().join("never-created"));
        assert_eq!(store.get("k").unwrap(), None);
        store.remove("k").unwrap();
    }
}
