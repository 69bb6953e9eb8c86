//! Refresh result models.

use serde::{Deserialize, Serialize};

use crate::portfolio::Snapshot;

/// Which value won the arbitration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SnapshotOrigin {
    /// The backend's fresh, non-zero summary.
    Fresh,
    /// The session cache.
    Cached,
    /// The caller's in-memory value from an earlier refresh.
    Prior,
    /// The backend's zero summary, adopted because nothing better existed.
    SuspectFresh,
}

/// A snapshot handed to the rendering layer together with its reliability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSnapshot {
    pub snapshot: Snapshot,
    /// False when the value may be a transient zero; callers render it muted.
    pub trusted: bool,
    pub origin: SnapshotOrigin,
}

impl ResolvedSnapshot {
    pub fn new(snapshot: Snapshot, trusted: bool, origin: SnapshotOrigin) -> Self {
        Self {
            snapshot,
            trusted,
            origin,
        }
    }

    /// Wraps a snapshot read from the session cache.
    pub fn from_cached(snapshot: Snapshot) -> Self {
        let trusted = snapshot.is_persistable();
        Self::new(snapshot, trusted, SnapshotOrigin::Cached)
    }
}

/// Final result of one refresh.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RefreshOutcome {
    Resolved(ResolvedSnapshot),
    /// The backend failed and nothing was cached or held in memory. Callers
    /// render an empty state rather than a fabricated zero.
    NoData,
}

impl RefreshOutcome {
    pub fn resolved(&self) -> Option<&ResolvedSnapshot> {
        match self {
            RefreshOutcome::Resolved(resolved) => Some(resolved),
            RefreshOutcome::NoData => None,
        }
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.resolved().map(|r| &r.snapshot)
    }

    pub fn is_trusted(&self) -> bool {
        self.resolved().is_some_and(|r| r.trusted)
    }

    pub fn into_resolved(self) -> Option<ResolvedSnapshot> {
        match self {
            RefreshOutcome::Resolved(resolved) => Some(resolved),
            RefreshOutcome::NoData => None,
        }
    }
}

/// Notification sent to snapshot subscribers during a refresh.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotUpdate {
    /// The cached value, published before the backend is queried.
    Provisional(ResolvedSnapshot),
    /// The arbitrated result.
    Resolved(RefreshOutcome),
}
