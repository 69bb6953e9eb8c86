//! Coinfolio Core - portfolio snapshot cache and refresh arbitration.
//!
//! This crate holds the logic the dashboard screens share when they paint a
//! portfolio: restoring the last known-good snapshot from session storage,
//! asking the backend for a fresh one, and deciding which of the two to show.
//! It is transport-agnostic and storage-agnostic; the backend is reached
//! through [`sync::PortfolioSource`] and session storage through
//! [`snapshot::SessionStorage`].

pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod session;
pub mod snapshot;
pub mod sync;

// Re-export common types
pub use portfolio::*;
pub use session::SessionScope;
pub use snapshot::{MemorySessionStorage, SessionStorage, SnapshotStore, SnapshotStoreConfig};
pub use sync::{
    PortfolioSource, RefreshOutcome, ResolvedSnapshot, SnapshotOrigin, SyncCoordinator,
};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
