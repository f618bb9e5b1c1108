//! Test helper utilities for server integration tests.

use assert_cmd::Command;
use clap::Parser;
use tokio::net::TcpListener;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};
use ydaemon_rs_server::cli::Cli;
use ydaemon_rs_server::config::build_service;
use ydaemon_rs_server::{serve, AppState};

/// yvDAI, the vault served by the `vault_yvdai` fixture.
pub const YV_DAI: &str = "0xdA816459F1AB5631232FE5e97a05BBBb94970c95";

/// Start a mock GraphQL server.
pub async fn start_mock_server() -> MockServer {
    MockServer::start().await
}

/// Absolute path of a fixture file.
pub fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}.json", env!("CARGO_MANIFEST_DIR"), name)
}

/// Load a fixture file as a string.
pub fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", path))
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

/// Mock an HTTP error response.
pub async fn mock_http_error(server: &MockServer, status_code: u16) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(status_code).set_body_string("upstream exploded"))
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

/// Start the server on an ephemeral port, routing mainnet to `mock`.
///
/// `extra_args` are appended to the command line. Returns the base URL.
pub async fn spawn_app(mock: &MockServer, reference: &str, extra_args: &[&str]) -> String {
    let subgraph = format!("1={}", mock.uri());
    let reference = fixture_path(reference);
    let mut args = vec![
        "ydaemon",
        "--subgraph",
        subgraph.as_str(),
        "--reference-snapshot",
        reference.as_str(),
    ];
    args.extend_from_slice(extra_args);

    let cli = Cli::try_parse_from(args).unwrap();
    let service = build_service(&cli).unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve(listener, AppState::new(service), std::future::pending()));

    format!("http://{addr}")
}

/// Create a CLI command (for validation tests).
pub fn ydaemon_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ydaemon"));
    for var in [
        "YDAEMON_SUBGRAPHS",
        "YDAEMON_BLACKLIST",
        "YDAEMON_REFERENCE_SNAPSHOT",
        "YDAEMON_PORT",
    ] {
        cmd.env_remove(var);
    }
    cmd
}
