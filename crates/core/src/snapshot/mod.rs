//! Snapshot module - session storage capability and the known-good snapshot store.

mod session_storage;
mod snapshot_store;

pub use session_storage::*;
pub use snapshot_store::*;
