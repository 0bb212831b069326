//! State store port - the key/value persistence substrate.
//!
//! A minimal string key/value contract that survives process restarts,
//! used by the session store to serialize the signed-in user and the
//! membership flag under two fixed keys. Synchronous by design: session
//! reads and mutations have no suspension points.

use thiserror::Error;

/// Errors from the persistence substrate.
#[derive(Debug, Clone, Error)]
pub enum StateStoreError {
    #[error("invalid state key: {0}")]
    InvalidKey(String),

    #[error("state store io error: {0}")]
    Io(String),
}

/// Port for persisted string key/value storage.
///
/// Values are opaque strings; serialization is the caller's concern.
/// `get` of a never-written key returns `Ok(None)`, and `remove` of an
/// absent key succeeds.
pub trait StateStore: Send + Sync {
    /// Read the value stored under a key.
    fn get(&self, key: &str) -> Result<Option<String>, StateStoreError>;

    /// Write a value under a key, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> Result<(), StateStoreError>;

    /// Remove a key and its value.
    fn remove(&self, key: &str) -> Result<(), StateStoreError>;
}
