//! Mapping from domain errors to HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use hostatlas_domain::HostAtlasError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::utils::logging::error_label;

/// Error returned by route handlers.
///
/// Every variant renders as `{"error": "<message>"}`. Remote and internal
/// failures keep their diagnostic for the log and show a fixed message.
#[derive(Debug, Error)]
pub enum ApiFailure {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    BadRequest(String),

    #[error("Connection failed: {0}")]
    LoginFailed(String),

    #[error("Remote request failed")]
    Remote(HostAtlasError),

    #[error("Internal server error")]
    Internal(HostAtlasError),
}

impl ApiFailure {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized | Self::LoginFailed(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) | Self::Remote(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable label for request outcome logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unauthorized | Self::LoginFailed(_) => "auth",
            Self::BadRequest(_) => "invalid_input",
            Self::Remote(cause) | Self::Internal(cause) => error_label(cause),
        }
    }
}

impl From<HostAtlasError> for ApiFailure {
    fn from(err: HostAtlasError) -> Self {
        match err {
            HostAtlasError::AuthenticationMissing(_) => Self::Unauthorized,
            HostAtlasError::Validation(message) => Self::BadRequest(message),
            HostAtlasError::Connectivity(_) | HostAtlasError::UnexpectedStatus { .. } => {
                Self::Remote(err)
            }
            HostAtlasError::Config(_) | HostAtlasError::Internal(_) => Self::Internal(err),
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        match &self {
            Self::Remote(cause) => {
                error!(error = %cause, status = ?cause.remote_status(), "remote request failed");
            }
            Self::Internal(cause) => error!(error = %cause, "internal failure"),
            _ => {}
        }

        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
