//! Typed cache with automatic serialization.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::{CacheError, FileStore, KeyValueStore, MemoryStore};

/// Type-safe cache over any [`KeyValueStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`. Clones share the same backing store.
#[derive(Debug, Clone)]
pub struct Cache {
    store: Arc<dyn KeyValueStore>,
}

impl Cache {
    /// Wrap a store.
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Wrap an already shared store.
    pub fn from_shared(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Cache backed by a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Cache backed by a [`FileStore`] rooted at `root`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cache = Cache::open_dir("/var/lib/shop")?;
    /// ```
    pub fn open_dir(root: impl Into<PathBuf>) -> Result<Self, CacheError> {
        Ok(Self::new(FileStore::open(root)?))
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist, and a
    /// [`CacheError::SerializeError`] if the stored bytes don't decode as `T`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cart: Option<Cart> = cache.get("cart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// cache.set("cart", &cart)?;
    /// ```
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.store.set(key, &bytes)?;
        tracing::trace!(key, bytes = bytes.len(), "cache write");
        Ok(())
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)?;
        tracing::trace!(key, "cache delete");
        Ok(())
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.store.keys()
    }

    /// The backing store, for sharing with another cache handle.
    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Snapshot {
        items: Vec<String>,
        total: f64,
    }

    #[test]
    fn test_typed_round_trip() {
        let cache = Cache::in_memory();
        let snapshot = Snapshot {
            items: vec!["1".to_string()],
            total: 199.99,
        };

        cache.set("cart", &snapshot).unwrap();
        let loaded: Option<Snapshot> = cache.get("cart").unwrap();
        assert_eq!(loaded, Some(snapshot));
    }

    #[test]
    fn test_missing_key_is_none() {
        let cache = Cache::in_memory();
        let loaded: Option<Snapshot> = cache.get("cart").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_unparsable_value_is_serialize_error() {
        let cache = Cache::in_memory();
        cache.store().set("cart", b"not json").unwrap();

        let result: Result<Option<Snapshot>, _> = cache.get("cart");
        assert!(matches!(result, Err(CacheError::SerializeError(_))));
    }

    #[test]
    fn test_clones_share_store() {
        let cache = Cache::in_memory();
        let other = cache.clone();

        cache.set("user", &"u1").unwrap();
        assert_eq!(other.get::<String>("user").unwrap().as_deref(), Some("u1"));
        assert_eq!(other.keys().unwrap(), vec!["user"]);
    }

    #[test]
    fn test_open_dir() {
        let dir = tempfile::tempdir().unwrap();
        let cache = Cache::open_dir(dir.path().join("store")).unwrap();
        cache.set("user", &"u2").unwrap();

        let reopened = Cache::open_dir(dir.path().join("store")).unwrap();
        assert!(reopened.exists("user").unwrap());
    }
}
