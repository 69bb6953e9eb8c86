//! Portfolio module - summary, holdings and snapshot models.

mod holdings_merge;
mod portfolio_model;

pub use holdings_merge::merge_holdings;
pub use portfolio_model::*;
