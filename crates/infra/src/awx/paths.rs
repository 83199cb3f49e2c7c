//! AWX REST API path templates (all relative to the controller base URL)

use hostatlas_domain::HostScope;

pub const ME: &str = "/api/v2/me/";
pub const ORGANIZATIONS: &str = "/api/v2/organizations/";

pub fn organization_inventories(org_id: u64) -> String {
    format!("/api/v2/organizations/{org_id}/inventories/")
}

pub fn inventory_root_groups(inventory_id: u64) -> String {
    format!("/api/v2/inventories/{inventory_id}/root_groups/")
}

pub fn group_children(group_id: u64) -> String {
    format!("/api/v2/groups/{group_id}/children/")
}

/// Hosts listing for a scope; groups use the recursive `all_hosts` view.
pub fn hosts(scope: HostScope) -> String {
    match scope {
        HostScope::Group(group_id) => format!("/api/v2/groups/{group_id}/all_hosts/"),
        HostScope::Inventory(inventory_id) => {
            format!("/api/v2/inventories/{inventory_id}/hosts/")
        }
    }
}

pub fn host(host_id: u64) -> String {
    format!("/api/v2/hosts/{host_id}/")
}

pub fn host_job_summaries(host_id: u64) -> String {
    format!("/api/v2/hosts/{host_id}/job_host_summaries/")
}

pub fn host_facts(host_id: u64) -> String {
    format!("/api/v2/hosts/{host_id}/ansible_facts/")
}
