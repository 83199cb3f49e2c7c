//! Conversions from external infrastructure errors into domain errors.

use hostatlas_domain::HostAtlasError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub HostAtlasError);

impl From<InfraError> for HostAtlasError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<HostAtlasError> for InfraError {
    fn from(value: HostAtlasError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoHostAtlasError {
    fn into_hostatlas(self) -> HostAtlasError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → HostAtlasError */
/* -------------------------------------------------------------------------- */

impl IntoHostAtlasError for HttpError {
    fn into_hostatlas(self) -> HostAtlasError {
        if self.is_builder() {
            return HostAtlasError::Config(format!("invalid HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            let url = self.url().map(ToString::to_string).unwrap_or_default();
            return HostAtlasError::UnexpectedStatus { status: status.as_u16(), url };
        }

        if self.is_timeout() {
            return HostAtlasError::Connectivity(format!("HTTP request timed out: {self}"));
        }

        if self.is_connect() {
            return HostAtlasError::Connectivity(format!("HTTP connection failure: {self}"));
        }

        if self.is_decode() {
            return HostAtlasError::Connectivity(format!("invalid response body: {self}"));
        }

        HostAtlasError::Connectivity(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_hostatlas())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → HostAtlasError */
/* -------------------------------------------------------------------------- */

impl IntoHostAtlasError for serde_json::Error {
    fn into_hostatlas(self) -> HostAtlasError {
        HostAtlasError::Connectivity(format!("unexpected response shape: {self}"))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(value.into_hostatlas())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
