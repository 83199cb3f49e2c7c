//! Router assembly

use axum::routing::{get, post};
use axum::Router;

use crate::commands;
use crate::context::SharedContext;

/// Build the complete axum router.
///
/// Session checks happen in the [`AuthenticatedSession`] extractor of each
/// protected handler, so an unauthenticated request is rejected before its
/// identifiers are even parsed.
///
/// [`AuthenticatedSession`]: crate::context::AuthenticatedSession
pub fn build_router(ctx: SharedContext) -> Router {
    let api = Router::new()
        .route("/organizations", get(commands::list_organizations))
        .route("/organizations/{org_id}/inventories", get(commands::list_inventories))
        .route("/inventories/{inv_id}/groups", get(commands::list_root_groups))
        .route("/groups/{group_id}/children", get(commands::list_group_children))
        .route("/hosts", get(commands::list_hosts))
        .route("/hosts/{host_id}", get(commands::get_host_details))
        .route("/hosts/{host_id}/jobs", get(commands::get_host_jobs))
        .route("/hosts/{host_id}/facts", get(commands::get_host_facts));

    Router::new()
        .route("/", get(commands::index))
        .route("/login", post(commands::login))
        .route("/logout", get(commands::logout))
        .route("/export", get(commands::export_hosts))
        .nest("/api", api)
        .with_state(ctx)
}
