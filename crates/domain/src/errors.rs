//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for HostAtlas
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum HostAtlasError {
    /// No usable session or credential context was supplied.
    #[error("Authentication missing: {0}")]
    AuthenticationMissing(String),

    /// A caller-supplied identifier or parameter was rejected before any
    /// remote call was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Transport-level failure (DNS, TLS, timeout, unreadable body).
    #[error("Connectivity error: {0}")]
    Connectivity(String),

    /// The remote API answered with a status other than 200.
    #[error("{url} returned status {status}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HostAtlasError {
    /// True for failures that mean the remote API could not be reached or
    /// refused the request.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connectivity(_) | Self::UnexpectedStatus { .. })
    }

    /// HTTP status returned by the remote API, when that is what failed.
    pub fn remote_status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for HostAtlas operations
pub type Result<T> = std::result::Result<T, HostAtlasError>;
