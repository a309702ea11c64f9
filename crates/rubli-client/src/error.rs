//! Client error types.

use thiserror::Error;

/// Errors returned by [`crate::ApiClient`] calls.
///
/// Every variant is logged once at the client boundary before it reaches the
/// caller; callers never need to log again to get a diagnostic.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure: connection refused, DNS, TLS, or the request timeout.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body, verbatim.
        message: String,
    },

    /// The response body did not match the expected schema.
    #[error("parse error: {0}")]
    Parse(String),

    /// Query parameters could not be encoded.
    #[error("invalid query parameters: {0}")]
    InvalidQuery(String),
}

impl ClientError {
    /// Whether the request was abandoned because it hit the client timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(error) if error.is_timeout())
    }

    /// HTTP status of an API error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
