use std::time::Duration;

use hostatlas_domain::HostAtlasError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,hostatlas=debug";

/// Install the global tracing subscriber.
///
/// Honors `RUST_LOG`; emits JSON lines when `HOSTATLAS_LOG_FORMAT=json`.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let json = std::env::var("HOSTATLAS_LOG_FORMAT")
        .map(|value| value.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    }
}

/// Log the outcome of a route handler with structured fields.
///
/// `command` is a stable identifier such as `"inventory::list_hosts"`;
/// `error_type` comes from [`error_label`]. Callers must not pass request
/// data that may contain credentials.
#[inline]
pub fn log_request_outcome(command: &str, elapsed: Duration, error_type: Option<&str>) {
    let duration_ms = elapsed.as_millis() as u64;

    match error_type {
        None => info!(command, duration_ms, "request_success"),
        Some(error_type) => warn!(command, duration_ms, error_type, "request_failure"),
    }
}

/// Convert a `HostAtlasError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &HostAtlasError) -> &'static str {
    match error {
        HostAtlasError::AuthenticationMissing(_) => "auth",
        HostAtlasError::Validation(_) => "invalid_input",
        HostAtlasError::Connectivity(_) => "connectivity",
        HostAtlasError::UnexpectedStatus { .. } => "unexpected_status",
        HostAtlasError::Config(_) => "config",
        HostAtlasError::Internal(_) => "internal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(error_label(&HostAtlasError::Validation("x".into())), "invalid_input");
        assert_eq!(
            error_label(&HostAtlasError::UnexpectedStatus { status: 500, url: String::new() }),
            "unexpected_status"
        );
        assert_eq!(error_label(&HostAtlasError::Connectivity("x".into())), "connectivity");
    }
}
