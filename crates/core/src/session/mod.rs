//! Identity-scoped snapshot session.
//!
//! The cached snapshot belongs to whoever is signed in. [`SessionScope`]
//! follows the auth state and clears the store exactly once whenever the
//! identity changes, so one user's figures are never painted for another.

use log::{debug, info};
use std::sync::{Arc, Mutex};

use crate::errors::{Error, Result};
use crate::snapshot::SnapshotStore;

pub struct SessionScope {
    store: Arc<SnapshotStore>,
    active_user: Mutex<Option<String>>,
}

impl SessionScope {
    pub fn new(store: Arc<SnapshotStore>) -> Self {
        Self {
            store,
            active_user: Mutex::new(None),
        }
    }

    pub fn store(&self) -> &Arc<SnapshotStore> {
        &self.store
    }

    /// The user the cached snapshot currently belongs to.
    pub fn active_user(&self) -> Result<Option<String>> {
        Ok(self.lock_active_user()?.clone())
    }

    /// Records a sign-in. Clears the cached snapshot when `user_id` differs
    /// from the active user, including the first sign-in of the session.
    ///
    /// Returns whether the store was cleared.
    pub fn sign_in(&self, user_id: &str) -> Result<bool> {
        let mut active = self.lock_active_user()?;
        if active.as_deref() == Some(user_id) {
            debug!("Session already belongs to the signed-in user");
            return Ok(false);
        }

        self.store.clear()?;
        info!("Identity changed, cleared cached portfolio snapshot");
        *active = Some(user_id.to_string());
        Ok(true)
    }

    /// Records a sign-out and clears the cached snapshot.
    ///
    /// Returns whether the store was cleared; signing out twice clears once.
    pub fn sign_out(&self) -> Result<bool> {
        let mut active = self.lock_active_user()?;
        if active.is_none() {
            return Ok(false);
        }

        self.store.clear()?;
        info!("Signed out, cleared cached portfolio snapshot");
        *active = None;
        Ok(true)
    }

    fn lock_active_user(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>> {
        self.active_user
            .lock()
            .map_err(|_| Error::Unexpected("session identity lock poisoned".to_string()))
    }
}
