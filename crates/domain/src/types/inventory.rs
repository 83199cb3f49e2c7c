//! Inventory types returned by the remote controller
//!
//! Remote objects stay loosely typed (`serde_json::Value`) except for hosts,
//! which get a minimal typed projection used by the export layer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outcome of the identity probe against `/api/v2/me/`.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionCheckResult {
    /// The controller accepted the credentials; carries the identity payload.
    Ok(Value),
    /// Human-readable reason the probe failed.
    Failed(String),
}

impl ConnectionCheckResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }
}

/// Results accumulated across every page of a paginated listing.
///
/// Order is server page order, then in-page order. A listing whose later
/// page failed is still returned, with `complete == false`: treat the
/// results as "at least these", not "exactly these".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagedResult<T> {
    pub results: Vec<T>,
    #[serde(skip)]
    complete: bool,
}

impl<T> Default for PagedResult<T> {
    fn default() -> Self {
        Self { results: Vec::new(), complete: true }
    }
}

impl<T> PagedResult<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one page worth of results, keeping their order.
    pub fn extend_page(&mut self, page: impl IntoIterator<Item = T>) {
        self.results.extend(page);
    }

    /// Mark the traversal as cut short by a failing later page.
    pub fn mark_truncated(&mut self) {
        self.complete = false;
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<T> From<Vec<T>> for PagedResult<T> {
    fn from(results: Vec<T>) -> Self {
        Self { results, complete: true }
    }
}

/// `summary_fields.last_job` projection of a host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastJobSummary {
    pub id: Option<i64>,
    pub status: Option<String>,
}

/// Host as returned by the inventory and group host listings.
///
/// The controller's object is kept as-is and serialized back unchanged,
/// nulls included. The accessors give typed views of the fields the export
/// relies on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostRecord {
    fields: Map<String, Value>,
}

impl HostRecord {
    pub fn id(&self) -> Option<i64> {
        self.fields.get("id").and_then(Value::as_i64)
    }

    pub fn name(&self) -> &str {
        self.str_field("name")
    }

    /// Empty when missing or null.
    pub fn description(&self) -> &str {
        self.str_field("description")
    }

    pub fn enabled(&self) -> bool {
        self.fields.get("enabled").and_then(Value::as_bool).unwrap_or(false)
    }

    /// Most recent job recorded for this host, if the controller reported one.
    pub fn last_job(&self) -> Option<LastJobSummary> {
        let last_job = self.fields.get("summary_fields")?.get("last_job")?.as_object()?;
        Some(LastJobSummary {
            id: last_job.get("id").and_then(Value::as_i64),
            status: last_job.get("status").and_then(Value::as_str).map(str::to_string),
        })
    }

    /// Raw field lookup for anything without a typed accessor.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    fn str_field(&self, key: &str) -> &str {
        self.fields.get(key).and_then(Value::as_str).unwrap_or_default()
    }
}

/// Which host listing to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostScope {
    /// Hosts directly in an inventory.
    Inventory(u64),
    /// Hosts in a group and all of its descendants.
    Group(u64),
}

impl HostScope {
    /// The group id, when present, wins over the inventory id.
    pub fn from_ids(inventory_id: u64, group_id: Option<u64>) -> Self {
        group_id.map_or(Self::Inventory(inventory_id), Self::Group)
    }
}
