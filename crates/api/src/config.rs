use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8085/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Connection settings for the portfolio backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }

    pub fn with_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Reads `COINFOLIO_API_URL` and `COINFOLIO_REQUEST_TIMEOUT_MS`, loading a
    /// `.env` file first if one is present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("COINFOLIO_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let timeout_ms: u64 = lookup("COINFOLIO_REQUEST_TIMEOUT_MS")
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);

        Self::new(base_url).with_timeout(Duration::from_millis(timeout_ms))
    }

    pub(crate) fn portfolio_url(&self) -> String {
        format!("{}/portfolio", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
