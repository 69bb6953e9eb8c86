//! Last known-good snapshot, persisted in session storage.

use log::{debug, warn};
use std::sync::Arc;

use super::SessionStorage;
use crate::constants::DEFAULT_SNAPSHOT_STORAGE_KEY;
use crate::errors::{Error, Result};
use crate::portfolio::Snapshot;

/// Configuration for [`SnapshotStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotStoreConfig {
    /// Key the serialized snapshot is stored under.
    pub storage_key: String,
}

impl SnapshotStoreConfig {
    pub fn new(storage_key: impl Into<String>) -> Result<Self> {
        let storage_key = storage_key.into();
        if storage_key.trim().is_empty() {
            return Err(Error::InvalidConfigValue(
                "snapshot storage key must not be empty".to_string(),
            ));
        }
        Ok(Self { storage_key })
    }
}

impl Default for SnapshotStoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_SNAPSHOT_STORAGE_KEY.to_string(),
        }
    }
}

/// Holder for the last known-good portfolio snapshot of the current session.
///
/// # Guarantees
///
/// - `save` never writes a snapshot whose total equity is not strictly
///   positive, so a transient zero can never become the cached value.
/// - `load` never fails because of the stored payload: anything that does not
///   parse into a valid snapshot reads as absent.
/// - Callers always receive owned copies; the stored value cannot be mutated
///   through a returned snapshot.
pub struct SnapshotStore {
    storage: Arc<dyn SessionStorage>,
    config: SnapshotStoreConfig,
}

impl SnapshotStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self::with_config(storage, SnapshotStoreConfig::default())
    }

    pub fn with_config(storage: Arc<dyn SessionStorage>, config: SnapshotStoreConfig) -> Self {
        Self { storage, config }
    }

    pub fn storage_key(&self) -> &str {
        &self.config.storage_key
    }

    /// Returns the stored snapshot, or `None` if nothing is stored or the
    /// stored payload is unreadable.
    ///
    /// Only a failure of the storage primitive itself is returned as an error.
    pub fn load(&self) -> Result<Option<Snapshot>> {
        let Some(raw) = self.storage.get_item(self.storage_key())? else {
            return Ok(None);
        };

        match serde_json::from_str::<Snapshot>(&raw) {
            Ok(snapshot) if snapshot.summary.is_valid() => Ok(Some(snapshot)),
            Ok(snapshot) => {
                warn!(
                    "Ignoring cached snapshot with invalid total equity {}",
                    snapshot.total_equity()
                );
                Ok(None)
            }
            Err(e) => {
                warn!("Failed to parse cached portfolio snapshot: {}", e);
                Ok(None)
            }
        }
    }

    /// Persists `snapshot` as the new known-good value.
    ///
    /// Returns `Ok(false)` without touching storage when the snapshot's total
    /// equity is not strictly positive.
    pub fn save(&self, snapshot: &Snapshot) -> Result<bool> {
        if !snapshot.is_persistable() {
            debug!(
                "Refusing to cache snapshot with total equity {}",
                snapshot.total_equity()
            );
            return Ok(false);
        }

        let payload = serde_json::to_string(snapshot)?;
        self.storage.set_item(self.storage_key(), &payload)?;
        debug!(
            "Cached portfolio snapshot (equity {}, {} holdings)",
            snapshot.total_equity(),
            snapshot.holdings.len()
        );
        Ok(true)
    }

    /// Removes the stored snapshot. Called on logout or identity change.
    pub fn clear(&self) -> Result<()> {
        self.storage.remove_item(self.storage_key())?;
        debug!("Cleared cached portfolio snapshot");
        Ok(())
    }
}
