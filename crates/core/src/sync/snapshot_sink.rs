//! Snapshot subscriber sinks.

use std::sync::{Arc, Mutex};
use tokio::sync::watch;

use super::SnapshotUpdate;

/// Trait for receiving snapshot updates from the coordinator.
///
/// # Design Rules
///
/// - `publish()` must be fast and non-blocking
/// - Failure to deliver must not affect the refresh (best-effort)
pub trait SnapshotSink: Send + Sync {
    fn publish(&self, update: SnapshotUpdate);
}

/// Discards every update.
#[derive(Clone, Default)]
pub struct NoOpSnapshotSink;

impl SnapshotSink for NoOpSnapshotSink {
    fn publish(&self, _update: SnapshotUpdate) {}
}

/// Sink backed by a `watch` channel; the rendering layer holds the receivers
/// and redraws on change.
pub struct WatchSnapshotSink {
    sender: watch::Sender<Option<SnapshotUpdate>>,
}

impl WatchSnapshotSink {
    pub fn new() -> (Self, watch::Receiver<Option<SnapshotUpdate>>) {
        let (sender, receiver) = watch::channel(None);
        (Self { sender }, receiver)
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<SnapshotUpdate>> {
        self.sender.subscribe()
    }
}

impl SnapshotSink for WatchSnapshotSink {
    fn publish(&self, update: SnapshotUpdate) {
        // send_replace stores the value even when nobody is subscribed yet
        self.sender.send_replace(Some(update));
    }
}

/// Mock sink for testing - collects published updates.
#[derive(Clone, Default)]
pub struct MockSnapshotSink {
    updates: Arc<Mutex<Vec<SnapshotUpdate>>>,
}

impl MockSnapshotSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected updates.
    pub fn updates(&self) -> Vec<SnapshotUpdate> {
        self.updates
            .lock()
            .map(|updates| updates.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.updates.lock().map(|u| u.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SnapshotSink for MockSnapshotSink {
    fn publish(&self, update: SnapshotUpdate) {
        if let Ok(mut updates) = self.updates.lock() {
            updates.push(update);
        }
    }
}
