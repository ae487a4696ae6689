//! Core error types for Project Explorer.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use thiserror::Error;

/// Core error type for explorer operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Dataset loading
    #[error("failed to load projects: HTTP status {status}")]
    HttpStatus { status: u16 },

    #[error("failed to load projects: network error: {reason}")]
    Network { reason: String },

    #[error("failed to load projects: invalid JSON (HTTP status {status}): {reason}")]
    JsonParseFailed { status: u16, reason: String },

    // View state
    #[error("page size {size} is not one of the allowed sizes")]
    InvalidPageSize { size: usize },

    // Configuration
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl Error {
    /// Create a network error.
    pub fn network(reason: impl Into<String>) -> Self {
        Self::Network {
            reason: reason.into(),
        }
    }

    /// Create a JSON parse error for a response with the given status.
    pub fn json_parse_failed(status: u16, reason: impl Into<String>) -> Self {
        Self::JsonParseFailed {
            status,
            reason: reason.into(),
        }
    }

    /// Create a configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// HTTP status carried by the error, when the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status } | Self::JsonParseFailed { status, .. } => Some(*status),
            Self::Network { .. } | Self::InvalidPageSize { .. } | Self::InvalidConfig { .. } => {
                None
            }
        }
    }
}
