//! Core error types for Coinfolio.
//!
//! Storage backends and portfolio sources convert their native failures into
//! the string-carrying variants below so this crate stays independent of any
//! particular browser, database or HTTP stack.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the snapshot cache.
///
/// Only storage failures escape a refresh. [`SourceError`] has no variant
/// here: source failures and corrupted cache payloads are recovered locally by
/// the coordinator and the store respectively.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Session storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Failed to encode snapshot: {0}")]
    Encode(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Backend-agnostic error type for session storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The storage primitive is not available at all (disabled, quota, closed).
    #[error("Session storage unavailable: {0}")]
    Unavailable(String),

    /// Reading a key failed.
    #[error("Failed to read key '{key}': {message}")]
    ReadFailed { key: String, message: String },

    /// Writing a key failed.
    #[error("Failed to write key '{key}': {message}")]
    WriteFailed { key: String, message: String },

    /// Removing a key failed.
    #[error("Failed to remove key '{key}': {message}")]
    RemoveFailed { key: String, message: String },
}

/// Errors reported by a [`crate::sync::PortfolioSource`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The backend could not be reached or answered with an HTTP failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request did not complete within the transport's deadline.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// The backend answered but the payload could not be understood.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Unknown error: {0}")]
    Unexpected(String),
}

impl SourceError {
    /// Returns true if a later refresh is likely to succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, SourceError::Transport(_) | SourceError::Timeout(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Encode(err.to_string())
    }
}
