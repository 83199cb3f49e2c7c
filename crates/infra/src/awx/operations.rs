//! Typed inventory operations over the AWX REST API

use async_trait::async_trait;
use hostatlas_core::InventoryApi;
use hostatlas_domain::{
    ConnectionCheckResult, CredentialContext, HostRecord, HostScope, PagedResult, RemoteConfig,
    Result,
};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::client::RemoteApiClient;
use super::paths;

/// [`InventoryApi`] backed by an AWX controller.
pub struct AwxInventoryApi {
    client: RemoteApiClient,
}

impl AwxInventoryApi {
    pub fn new(client: RemoteApiClient) -> Self {
        Self { client }
    }

    /// Build the client and facade for one session's credentials.
    ///
    /// # Errors
    /// Returns `HostAtlasError::Config` if the HTTP client cannot be built.
    pub fn connect(context: CredentialContext, config: &RemoteConfig) -> Result<Self> {
        Ok(Self::new(RemoteApiClient::new(context, config)?))
    }
}

#[async_trait]
impl InventoryApi for AwxInventoryApi {
    async fn check_connection(&self) -> ConnectionCheckResult {
        self.client.check_connection().await
    }

    async fn list_organizations(&self) -> Result<PagedResult<Value>> {
        self.client.fetch_all_pages(paths::ORGANIZATIONS, &[]).await
    }

    async fn list_inventories(&self, org_id: u64) -> Result<PagedResult<Value>> {
        self.client.fetch_all_pages(&paths::organization_inventories(org_id), &[]).await
    }

    async fn list_root_groups(&self, inventory_id: u64) -> Result<PagedResult<Value>> {
        self.client.fetch_all_pages(&paths::inventory_root_groups(inventory_id), &[]).await
    }

    async fn list_group_children(&self, group_id: u64) -> Result<PagedResult<Value>> {
        self.client.fetch_all_pages(&paths::group_children(group_id), &[]).await
    }

    async fn list_hosts(&self, scope: HostScope) -> Result<PagedResult<HostRecord>> {
        self.client.fetch_all_pages(&paths::hosts(scope), &[]).await
    }

    async fn get_host_details(&self, host_id: u64) -> Result<Option<Value>> {
        let host = self.client.get_optional_json(&paths::host(host_id)).await?;
        if host.is_none() {
            debug!(host_id, "host not found or inaccessible");
        }
        Ok(host)
    }

    async fn get_host_jobs(&self, host_id: u64) -> Result<PagedResult<Value>> {
        self.client.fetch_all_pages(&paths::host_job_summaries(host_id), &[]).await
    }

    // Facts that were never gathered and an inaccessible host look the same
    // to callers: both yield an empty map.
    async fn get_host_facts(&self, host_id: u64) -> Map<String, Value> {
        match self.client.get_optional_json(&paths::host_facts(host_id)).await {
            Ok(Some(Value::Object(facts))) => facts,
            Ok(Some(other)) => {
                debug!(host_id, kind = json_kind(&other), "facts payload is not an object");
                Map::new()
            }
            Ok(None) => Map::new(),
            Err(err) => {
                warn!(host_id, error = %err, "failed to fetch host facts");
                Map::new()
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
