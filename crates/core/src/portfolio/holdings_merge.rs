//! Holdings merge rule shared by every arbitration branch.

use super::Holding;

/// Returns `incoming` unless it is empty, in which case `previous` is kept.
///
/// An empty holdings list from the backend is never allowed to blank out rows
/// that were already on screen. When both lists are non-empty the incoming
/// one wins outright; rows are never merged individually.
pub fn merge_holdings(previous: &[Holding], incoming: &[Holding]) -> Vec<Holding> {
    if incoming.is_empty() {
        previous.to_vec()
    } else {
        incoming.to_vec()
    }
}
