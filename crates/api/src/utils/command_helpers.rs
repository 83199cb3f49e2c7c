//! Route execution helpers
//!
//! Wraps handler bodies with timing and outcome logging so every route logs
//! the same fields.

use std::time::Instant;

use hostatlas_domain::Result as DomainResult;

use crate::utils::logging::{error_label, log_request_outcome};

/// Execute a handler body with automatic timing and outcome logging.
///
/// # Example
///
/// ```rust,ignore
/// pub async fn list_organizations(
///     session: AuthenticatedSession,
///     State(ctx): State<SharedContext>,
/// ) -> Result<Json<PagedResult<Value>>, ApiFailure> {
///     execute_logged("inventory::list_organizations", || async {
///         ctx.inventory_api(session.credentials)?.list_organizations().await
///     })
///     .await
///     .map(Json)
///     .map_err(ApiFailure::from)
/// }
/// ```
pub async fn execute_logged<F, Fut, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = DomainResult<T>>,
{
    let start = Instant::now();

    let result = command_fn().await;

    let error_type = result.as_ref().err().map(error_label);
    log_request_outcome(command_name, start.elapsed(), error_type);

    result
}
