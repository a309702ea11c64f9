//! # rubli-client
//!
//! Typed HTTP client for the RUBLI analytics API.
//!
//! One method per backend endpoint, grouped by resource:
//! - dashboard statistics
//! - contracts, vendors, institutions, sectors
//! - analysis (money flow, category summary, year-over-year, risk distribution)
//! - network graph
//! - price hypotheses and investigation cases (with review submission)
//! - watchlist, dossiers, risk feedback
//! - CSV / Excel exports
//!
//! A single [`ApiClient`] owns the configured transport (API root, timeout,
//! default headers). Build it once at startup and pass it to whatever needs
//! it; it is cheap to clone.

pub mod analysis;
pub mod contracts;
pub mod dossiers;
pub mod export;
pub mod feedback;
pub mod hypotheses;
pub mod institutions;
pub mod investigation;
pub mod network;
pub mod sectors;
pub mod stats;
pub mod vendors;
pub mod watchlist;

mod error;
mod http;
mod query;

pub use error::ClientError;
pub use http::ExportFile;
pub use query::QueryParams;

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use rubli_config::ApiConfig;

/// HTTP client for the analytics API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    root: String,
}

impl ApiClient {
    /// Build a client from transport configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            root: config.api_root(),
        })
    }

    /// The URL prefix every endpoint path is appended to.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }
}
