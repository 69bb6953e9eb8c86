//! Portfolio source capability.

use async_trait::async_trait;

use crate::errors::SourceError;
use crate::portfolio::{Holding, PortfolioSummary};

/// Backend that computes the live portfolio.
///
/// Timeouts are the implementation's concern; they surface as
/// [`SourceError::Timeout`] and are handled like any other fetch failure.
#[async_trait]
pub trait PortfolioSource: Send + Sync {
    /// Fetches the aggregate summary.
    ///
    /// A zero `total_equity` is a legitimate answer, not an error, even though
    /// the backend may emit it transiently while prices are still loading.
    async fn fetch_summary(&self) -> Result<PortfolioSummary, SourceError>;

    /// Fetches the per-asset holdings. An empty list is a legitimate answer.
    async fn fetch_holdings(&self) -> Result<Vec<Holding>, SourceError>;
}
