//! Error types for the portfolio API client.

use coinfolio_core::errors::SourceError;
use thiserror::Error;

/// Errors that can occur while talking to the portfolio backend.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request could not be sent or the connection dropped.
    #[error("Request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body could not be decoded into a portfolio.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ApiError::Timeout(error.to_string())
        } else if error.is_decode() {
            ApiError::Decode(error.to_string())
        } else {
            ApiError::Request(error.to_string())
        }
    }
}

impl From<ApiError> for SourceError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Request(message) => SourceError::Transport(message),
            ApiError::Timeout(message) => SourceError::Timeout(message),
            ApiError::Http { status, message } => {
                SourceError::Transport(format!("HTTP {}: {}", status, message))
            }
            ApiError::Decode(message) => SourceError::InvalidPayload(message),
        }
    }
}
