//! Cross-cutting error types for RUBLI.
//!
//! Domain-specific errors (`ClientError`, `ConfigError`, `ReviewError`) are
//! defined in their respective crates and converge into `anyhow` in
//! `rubli-cli`.

use thiserror::Error;

/// Errors that can be raised by any RUBLI crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A review or status transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
