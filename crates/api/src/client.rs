//! HTTP implementation of [`PortfolioSource`] for the Coinfolio backend.

use async_trait::async_trait;
use coinfolio_core::errors::SourceError;
use coinfolio_core::{Holding, PortfolioSource, PortfolioSummary, Snapshot};
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::errors::ApiError;
use crate::models::{decode_portfolio, ErrorResponse};

/// User id the backend falls back to when nobody is signed in.
pub const ANONYMOUS_USER_ID: &str = "default";

/// Portfolio source backed by `GET {base_url}/portfolio?userId=...`.
///
/// The endpoint returns summary and holdings together; each fetch issues its
/// own request and keeps its half, so the coordinator can run them
/// independently.
pub struct PortfolioApiClient {
    client: Client,
    config: ApiConfig,
    user_id: String,
}

impl PortfolioApiClient {
    pub fn new(config: ApiConfig, user_id: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            config,
            user_id: user_id.into(),
        }
    }

    /// Client for the signed-in user, or the anonymous user when `None`.
    pub fn for_user(config: ApiConfig, user_id: Option<&str>) -> Self {
        Self::new(config, user_id.unwrap_or(ANONYMOUS_USER_ID))
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Fetches and decodes the full portfolio.
    pub async fn get_portfolio(&self) -> Result<Snapshot, ApiError> {
        let url = self.config.portfolio_url();
        debug!("Portfolio request: {} for user {}", url, self.user_id);

        let response = self
            .client
            .get(&url)
            .query(&[("userId", self.user_id.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(|e| e.error)
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            warn!("Portfolio request failed with {}: {}", status, message);
            return Err(ApiError::Http {
                status: status.as_u16(),
                message,
            });
        }

        decode_portfolio(&body)
    }
}

#[async_trait]
impl PortfolioSource for PortfolioApiClient {
    async fn fetch_summary(&self) -> Result<PortfolioSummary, SourceError> {
        let snapshot = self.get_portfolio().await?;
        Ok(snapshot.summary)
    }

    async fn fetch_holdings(&self) -> Result<Vec<Holding>, SourceError> {
        let snapshot = self.get_portfolio().await?;
        Ok(snapshot.holdings)
    }
}
