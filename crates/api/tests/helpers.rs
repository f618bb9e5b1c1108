//! Test helper utilities for API crate integration tests.

use std::sync::Arc;

use url::Url;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};
use ydaemon_rs_api::{Blacklist, ClientConfig, ReferenceStore, SubgraphClient, VaultService};

/// Chain every mock server is registered for.
pub const MAINNET: u64 = 1;

/// yvDAI, the vault served by the `vault_yvdai` fixture.
pub const YV_DAI: &str = "0xdA816459F1AB5631232FE5e97a05BBBb94970c95";

/// Start a mock GraphQL server.
pub async fn start_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create a ClientConfig routing mainnet to a mock server.
pub fn client_config_with_mock(mock: &MockServer) -> ClientConfig {
    ClientConfig::new().with_endpoint(MAINNET, Url::parse(&mock.uri()).unwrap())
}

/// Create a client routing mainnet to a mock server.
pub fn client_with_mock(mock: &MockServer) -> SubgraphClient {
    SubgraphClient::with_config(client_config_with_mock(mock)).unwrap()
}

/// Create a service routing mainnet to a mock server.
pub fn service_with_mock(
    mock: &MockServer,
    store: ReferenceStore,
    blacklist: Blacklist,
) -> VaultService {
    VaultService::new(client_with_mock(mock), Arc::new(store), blacklist)
}

/// Load a fixture file as a string.
pub fn load_fixture(name: &str) -> String {
    let path = format!(
        "{}/tests/fixtures/{}.json",
        env!("CARGO_MANIFEST_DIR"),
        name
    );
    std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", path))
}

/// Load the mainnet reference fixture into a store.
pub fn reference_store() -> ReferenceStore {
    ReferenceStore::from_json_str(&load_fixture("reference_mainnet")).unwrap()
}

/// Mock a GraphQL POST request with a fixture response.
pub async fn mock_graphql_response(server: &MockServer, fixture_name: &str) {
    let body = load_fixture(fixture_name);
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Fail the test if the server sees any request.
pub async fn expect_no_requests(server: &MockServer) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(server)
        .await;
}

/// Mock a GraphQL error response with a single error message.
pub async fn mock_graphql_error(server: &MockServer, error_message: &str) {
    let body = format!(
        r#"{{"errors":[{{"message":"{}"}}],"data":null}}"#,
        error_message
    );
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Mock a GraphQL response with multiple errors.
pub async fn mock_graphql_errors(server: &MockServer, error_messages: &[&str]) {
    let errors: Vec<String> = error_messages
        .iter()
        .map(|msg| format!(r#"{{"message":"{}"}}"#, msg))
        .collect();
    let body = format!(r#"{{"errors":[{}],"data":null}}"#, errors.join(","));
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Mock an HTTP error response.
pub async fn mock_http_error(server: &MockServer, status_code: u16) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(status_code).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(server)
        .await;
}

/// Mock a response with null data (no errors but no data).
pub async fn mock_null_data(server: &MockServer) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":null}"#))
        .mount(server)
        .await;
}

/// Mock a response whose body is not JSON at all.
pub async fn mock_raw_body(server: &MockServer, body: &str) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}
