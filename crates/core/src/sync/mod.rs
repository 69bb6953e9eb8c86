//! Sync module - refreshing the portfolio from its source.
//!
//! - [`source_traits`] - the backend capability the coordinator consumes
//! - [`sync_coordinator`] - one refresh: cache, fetch, arbitrate, write back
//! - [`snapshot_sink`] - subscribers for provisional and final results
//! - [`sync_model`] - resolved snapshot and outcome types
//!
//! ```text
//! Screen → SyncCoordinator → PortfolioSource (backend)
//!               ↓      ↑
//!          SnapshotStore (session)
//!               ↓
//!          SnapshotSink (rendering layer)
//! ```

pub mod snapshot_sink;
pub mod source_traits;
pub mod sync_coordinator;
pub mod sync_model;


pub use snapshot_sink::{MockSnapshotSink, NoOpSnapshotSink, SnapshotSink, WatchSnapshotSink};
pub use source_traits::PortfolioSource;
pub use sync_coordinator::SyncCoordinator;
pub use sync_model::{RefreshOutcome, ResolvedSnapshot, SnapshotOrigin, SnapshotUpdate};
