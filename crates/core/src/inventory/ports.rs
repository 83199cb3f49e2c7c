//! Port interfaces for the remote inventory API
//!
//! Implemented by `hostatlas-infra::awx::AwxInventoryApi`. Identifiers are
//! typed as `u64` so only validated, non-negative integers ever reach a
//! request path.

use async_trait::async_trait;
use hostatlas_domain::{ConnectionCheckResult, HostRecord, HostScope, PagedResult, Result};
use serde_json::{Map, Value};

/// Typed operations the dashboard and the export layer need from the
/// remote controller.
///
/// Every listing follows pagination to the end. A failure on the first page
/// is an error; a failure on a later page yields a truncated
/// [`PagedResult`] instead.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// Probe the identity endpoint. Never fails; problems are reported in
    /// [`ConnectionCheckResult::Failed`].
    async fn check_connection(&self) -> ConnectionCheckResult;

    async fn list_organizations(&self) -> Result<PagedResult<Value>>;

    async fn list_inventories(&self, org_id: u64) -> Result<PagedResult<Value>>;

    /// Top-level groups of an inventory.
    async fn list_root_groups(&self, inventory_id: u64) -> Result<PagedResult<Value>>;

    async fn list_group_children(&self, group_id: u64) -> Result<PagedResult<Value>>;

    /// Hosts of an inventory, or of a group (recursively) when the scope is
    /// a group.
    async fn list_hosts(&self, scope: HostScope) -> Result<PagedResult<HostRecord>>;

    /// Host detail. `Ok(None)` means "not found or inaccessible".
    async fn get_host_details(&self, host_id: u64) -> Result<Option<Value>>;

    /// Job summaries of every job that touched the host.
    async fn get_host_jobs(&self, host_id: u64) -> Result<PagedResult<Value>>;

    /// Gathered facts. Missing facts and remote errors both yield an empty
    /// map.
    async fn get_host_facts(&self, host_id: u64) -> Map<String, Value>;
}
