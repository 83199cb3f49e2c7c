//! Integration tests for the AWX inventory API
//!
//! **Coverage:**
//! - Pagination: ordering, relative and absolute `next` links
//! - First-page failures abort, later-page failures truncate
//! - Host detail / facts fallbacks for non-200 responses
//! - Host listing scope (group vs inventory path)
//!
//! **Infrastructure:**
//! - WireMock HTTP server standing in for the controller
//! - `AwxInventoryApi` with real `RemoteApiClient` / `HttpClient`

use hostatlas_core::InventoryApi;
use hostatlas_domain::{CredentialContext, HostAtlasError, HostScope, RemoteConfig};
use hostatlas_infra::AwxInventoryApi;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helpers
// ============================================================================

fn api_for(server: &MockServer) -> AwxInventoryApi {
    let context = CredentialContext::new(&server.uri(), Some("test-token"), None, None);
    AwxInventoryApi::connect(context, &RemoteConfig::default()).expect("api should build")
}

fn page(results: Value, next: Option<&str>) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "results": results, "next": next }))
}

/// Mount a three page organization listing where page 2 answers `page2`.
async fn mount_three_pages(server: &MockServer, page2: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/api/v2/organizations/"))
        .and(query_param_is_missing("page"))
        .respond_with(page(json!(["a", "b"]), Some("/api/v2/organizations/?page=2")))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/organizations/"))
        .and(query_param("page", "2"))
        .respond_with(page2)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/organizations/"))
        .and(query_param("page", "3"))
        .respond_with(page(json!(["d"]), None))
        .mount(server)
        .await;
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn follows_every_page_in_order() {
    let server = MockServer::start().await;
    mount_three_pages(&server, page(json!(["c"]), Some("/api/v2/organizations/?page=3"))).await;

    let orgs = api_for(&server).list_organizations().await.expect("listing succeeds");

    assert_eq!(orgs.results, vec![json!("a"), json!("b"), json!("c"), json!("d")]);
    assert!(orgs.is_complete());
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn later_page_failure_returns_partial_results() {
    let server = MockServer::start().await;
    mount_three_pages(&server, ResponseTemplate::new(500)).await;

    let orgs = api_for(&server).list_organizations().await.expect("partial result is not an error");

    assert_eq!(orgs.results, vec![json!("a"), json!("b")]);
    assert!(!orgs.is_complete());
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn later_page_garbage_returns_partial_results() {
    let server = MockServer::start().await;
    mount_three_pages(&server, ResponseTemplate::new(200).set_body_string("not json")).await;

    let orgs = api_for(&server).list_organizations().await.expect("partial result is not an error");

    assert_eq!(orgs.results, vec![json!("a"), json!("b")]);
    assert!(!orgs.is_complete());
}

#[tokio::test]
async fn first_page_failure_is_a_connectivity_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/organizations/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let err = api_for(&server).list_organizations().await.unwrap_err();

    assert!(err.is_connectivity());
    assert_eq!(err.remote_status(), Some(500));
}

#[tokio::test]
async fn first_page_unreachable_is_a_connectivity_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let context = CredentialContext::new(&format!("http://{addr}/"), Some("tok"), None, None);
    let api = AwxInventoryApi::connect(context, &RemoteConfig::default()).unwrap();

    let err = api.list_organizations().await.unwrap_err();
    assert!(matches!(err, HostAtlasError::Connectivity(_)), "{err:?}");
}

#[tokio::test]
async fn resolves_relative_next_links_against_base_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/inventories/3/hosts/"))
        .respond_with(page(
            json!([{"id": 1, "name": "web-01", "enabled": true}]),
            Some("/api/v2/hosts/?page=2"),
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/hosts/"))
        .and(query_param("page", "2"))
        .respond_with(page(json!([{"id": 2, "name": "web-02", "enabled": false}]), None))
        .expect(1)
        .mount(&server)
        .await;

    let hosts = api_for(&server).list_hosts(HostScope::Inventory(3)).await.unwrap();

    let names: Vec<&str> = hosts.results.iter().map(|h| h.name()).collect();
    assert_eq!(names, ["web-01", "web-02"]);
}

#[tokio::test]
async fn follows_absolute_next_links() {
    let server = MockServer::start().await;
    let absolute_next = format!("{}/api/v2/groups/5/children/?page=2", server.uri());
    Mock::given(method("GET"))
        .and(path("/api/v2/groups/5/children/"))
        .and(query_param_is_missing("page"))
        .respond_with(page(json!([{"id": 6}]), Some(&absolute_next)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/groups/5/children/"))
        .and(query_param("page", "2"))
        .respond_with(page(json!([{"id": 7}]), None))
        .mount(&server)
        .await;

    let children = api_for(&server).list_group_children(5).await.unwrap();
    assert_eq!(children.results, vec![json!({"id": 6}), json!({"id": 7})]);
}

// ============================================================================
// Domain operations
// ============================================================================

#[tokio::test]
async fn group_scope_uses_group_hosts_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/groups/9/all_hosts/"))
        .respond_with(page(json!([{"id": 11, "name": "db-01", "enabled": true}]), None))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/inventories/3/hosts/"))
        .respond_with(page(json!([]), None))
        .expect(0)
        .mount(&server)
        .await;

    let hosts = api_for(&server).list_hosts(HostScope::from_ids(3, Some(9))).await.unwrap();

    assert_eq!(hosts.len(), 1);
    assert_eq!(hosts.results[0].id(), Some(11));
}

#[tokio::test]
async fn lists_inventories_and_root_groups() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/organizations/2/inventories/"))
        .respond_with(page(json!([{"id": 3, "name": "prod"}]), None))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/inventories/3/root_groups/"))
        .respond_with(page(json!([{"id": 5, "name": "web"}]), None))
        .mount(&server)
        .await;

    let api = api_for(&server);
    let inventories = api.list_inventories(2).await.unwrap();
    let groups = api.list_root_groups(3).await.unwrap();

    assert_eq!(inventories.results, vec![json!({"id": 3, "name": "prod"})]);
    assert_eq!(groups.results, vec![json!({"id": 5, "name": "web"})]);
}

#[tokio::test]
async fn host_details_not_found_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/hosts/404/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
        .mount(&server)
        .await;

    let details = api_for(&server).get_host_details(404).await.expect("404 is not an error");
    assert_eq!(details, None);
}

#[tokio::test]
async fn host_details_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/hosts/12/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 12, "name": "app"})))
        .mount(&server)
        .await;

    let details = api_for(&server).get_host_details(12).await.unwrap();
    assert_eq!(details, Some(json!({"id": 12, "name": "app"})));
}

#[tokio::test]
async fn host_facts_not_found_is_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/hosts/404/ansible_facts/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let facts = api_for(&server).get_host_facts(404).await;
    assert!(facts.is_empty());
}

#[tokio::test]
async fn host_facts_returned_as_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/hosts/12/ansible_facts/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ansible_distribution": "RedHat", "ansible_memtotal_mb": 7820})),
        )
        .mount(&server)
        .await;

    let facts = api_for(&server).get_host_facts(12).await;
    assert_eq!(facts.get("ansible_distribution"), Some(&json!("RedHat")));
}

#[tokio::test]
async fn host_jobs_follow_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/hosts/12/job_host_summaries/"))
        .and(query_param_is_missing("page"))
        .respond_with(page(
            json!([{"job": 100}]),
            Some("/api/v2/hosts/12/job_host_summaries/?page=2"),
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/hosts/12/job_host_summaries/"))
        .and(query_param("page", "2"))
        .respond_with(page(json!([{"job": 101}]), None))
        .mount(&server)
        .await;

    let jobs = api_for(&server).get_host_jobs(12).await.unwrap();
    assert_eq!(jobs.results, vec![json!({"job": 100}), json!({"job": 101})]);
}
