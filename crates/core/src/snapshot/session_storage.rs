//! Session-scoped key/value storage capability.
//!
//! The hosting environment decides what "session" means (a browser tab, a
//! desktop window, a server-side session). The snapshot store only needs
//! string get/set/remove against it.

use dashmap::DashMap;
use std::sync::Arc;

use crate::errors::Result;

/// Storage primitive scoped to the lifetime of one user session.
///
/// Each call is expected to be individually atomic. Implementations convert
/// their native failures into [`crate::errors::StorageError`].
pub trait SessionStorage: Send + Sync {
    /// Returns the raw value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// In-process session storage.
///
/// Cloning yields another handle onto the same map, so a coordinator and the
/// identity scope can share one session.
#[derive(Clone, Default, Debug)]
pub struct MemorySessionStorage {
    items: Arc<DashMap<String, String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).map(|entry| entry.value().clone()))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}
