//! Inventory navigation routes
//!
//! Each handler validates its identifiers first, then builds a remote client
//! from the session's credentials and makes the call. Listings are returned
//! as `{"results": [...]}`.

use axum::extract::{Path, Query, State};
use axum::Json;
use hostatlas_core::{parse_path_id, HostQuery};
use hostatlas_domain::{HostRecord, PagedResult};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::context::{AuthenticatedSession, SharedContext};
use crate::error::ApiFailure;
use crate::utils::command_helpers::execute_logged;

type Listing<T> = Result<Json<PagedResult<T>>, ApiFailure>;

/// Query string of `GET /api/hosts`.
#[derive(Debug, Default, Deserialize)]
pub struct HostListParams {
    pub inventory_id: Option<String>,
    pub group_id: Option<String>,
}

pub async fn list_organizations(
    session: AuthenticatedSession,
    State(ctx): State<SharedContext>,
) -> Listing<Value> {
    execute_logged("inventory::list_organizations", || async {
        ctx.inventory_api(session.credentials)?.list_organizations().await
    })
    .await
    .map(Json)
    .map_err(ApiFailure::from)
}

pub async fn list_inventories(
    session: AuthenticatedSession,
    State(ctx): State<SharedContext>,
    Path(org_id): Path<String>,
) -> Listing<Value> {
    execute_logged("inventory::list_inventories", || async {
        let org_id = parse_path_id("Organization ID", &org_id)?;
        ctx.inventory_api(session.credentials)?.list_inventories(org_id).await
    })
    .await
    .map(Json)
    .map_err(ApiFailure::from)
}

/// Root groups of an inventory.
pub async fn list_root_groups(
    session: AuthenticatedSession,
    State(ctx): State<SharedContext>,
    Path(inventory_id): Path<String>,
) -> Listing<Value> {
    execute_logged("inventory::list_root_groups", || async {
        let inventory_id = parse_path_id("Inventory ID", &inventory_id)?;
        ctx.inventory_api(session.credentials)?.list_root_groups(inventory_id).await
    })
    .await
    .map(Json)
    .map_err(ApiFailure::from)
}

pub async fn list_group_children(
    session: AuthenticatedSession,
    State(ctx): State<SharedContext>,
    Path(group_id): Path<String>,
) -> Listing<Value> {
    execute_logged("inventory::list_group_children", || async {
        let group_id = parse_path_id("Group ID", &group_id)?;
        ctx.inventory_api(session.credentials)?.list_group_children(group_id).await
    })
    .await
    .map(Json)
    .map_err(ApiFailure::from)
}

/// Hosts of an inventory, or of one group (recursively) when `group_id` is
/// given.
pub async fn list_hosts(
    session: AuthenticatedSession,
    State(ctx): State<SharedContext>,
    Query(params): Query<HostListParams>,
) -> Listing<HostRecord> {
    execute_logged("inventory::list_hosts", || async {
        let query =
            HostQuery::validate(params.inventory_id.as_deref(), params.group_id.as_deref())?;
        ctx.inventory_api(session.credentials)?.list_hosts(query.scope()).await
    })
    .await
    .map(Json)
    .map_err(ApiFailure::from)
}

/// Host detail, or JSON `null` when the remote API does not return it.
pub async fn get_host_details(
    session: AuthenticatedSession,
    State(ctx): State<SharedContext>,
    Path(host_id): Path<String>,
) -> Result<Json<Option<Value>>, ApiFailure> {
    execute_logged("inventory::get_host_details", || async {
        let host_id = parse_path_id("Host ID", &host_id)?;
        ctx.inventory_api(session.credentials)?.get_host_details(host_id).await
    })
    .await
    .map(Json)
    .map_err(ApiFailure::from)
}

pub async fn get_host_jobs(
    session: AuthenticatedSession,
    State(ctx): State<SharedContext>,
    Path(host_id): Path<String>,
) -> Listing<Value> {
    execute_logged("inventory::get_host_jobs", || async {
        let host_id = parse_path_id("Host ID", &host_id)?;
        ctx.inventory_api(session.credentials)?.get_host_jobs(host_id).await
    })
    .await
    .map(Json)
    .map_err(ApiFailure::from)
}

/// Gathered facts; `{}` when none are available.
pub async fn get_host_facts(
    session: AuthenticatedSession,
    State(ctx): State<SharedContext>,
    Path(host_id): Path<String>,
) -> Result<Json<Map<String, Value>>, ApiFailure> {
    execute_logged("inventory::get_host_facts", || async {
        let host_id = parse_path_id("Host ID", &host_id)?;
        Ok(ctx.inventory_api(session.credentials)?.get_host_facts(host_id).await)
    })
    .await
    .map(Json)
    .map_err(ApiFailure::from)
}
