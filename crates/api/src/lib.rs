//! Coinfolio API - reqwest-backed portfolio source.
//!
//! Implements [`coinfolio_core::PortfolioSource`] against the backend's
//! `/portfolio` endpoint so the snapshot coordinator can be driven by the
//! real service. Transport failures, non-success statuses and malformed
//! bodies all surface as [`coinfolio_core::errors::SourceError`], which the
//! coordinator recovers from by falling back to cached data.

pub mod client;
pub mod config;
pub mod errors;
pub mod models;

pub use client::{PortfolioApiClient, ANONYMOUS_USER_ID};
pub use config::ApiConfig;
pub use errors::ApiError;
pub use models::decode_portfolio;
