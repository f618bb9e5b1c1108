//! HTTP boundary tests: real router, real sockets, mocked subgraph.

use reqwest::StatusCode;
use serde_json::Value;

use super::helpers::{
    expect_no_requests, mock_graphql_response, mock_http_error, spawn_app, start_mock_server,
    YV_DAI,
};

async fn get(url: &str) -> reqwest::Response {
    reqwest::get(url).await.unwrap()
}

#[tokio::test]
async fn test_in_queue_strategies() {
    let server = start_mock_server().await;
    mock_graphql_response(&server, "vault_yvdai").await;
    let base = spawn_app(&server, "reference", &[]).await;

    let response = get(&format!("{base}/1/vaults/{YV_DAI}?strategiesCondition=inQueue")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    let strategies = body["strategies"].as_array().unwrap();
    assert_eq!(strategies.len(), 2);
    assert!(strategies.iter().all(|s| s["in_queue"] == Value::Bool(true)));

    assert_eq!(body["address"], YV_DAI);
    assert_eq!(body["chain_id"], 1);
    assert_eq!(body["display_name"], "DAI");
    assert_eq!(body["tvl"]["price"], "1.0001");
    assert_eq!(body["tvl"]["total_assets"], "1250000000000000000000000");
    assert_eq!(body["apy"]["type"], "v2:averaged");
    assert!(body["icon"]
        .as_str()
        .unwrap()
        .ends_with(&format!("/1/{YV_DAI}/logo-128.png")));
}

#[tokio::test]
async fn test_all_strategies_by_default() {
    let server = start_mock_server().await;
    mock_graphql_response(&server, "vault_yvdai").await;
    let base = spawn_app(&server, "reference", &[]).await;

    let body: Value = get(&format!("{base}/1/vaults/{}", YV_DAI.to_lowercase()))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["strategies"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_upstream_failure_is_opaque_500() {
    let server = start_mock_server().await;
    mock_http_error(&server, 500).await;
    let base = spawn_app(&server, "reference", &[]).await;

    let response = get(&format!("{base}/1/vaults/{YV_DAI}")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.text().await.unwrap();
    assert_eq!(body, "Impossible to fetch subgraph");
    assert!(serde_json::from_str::<Value>(&body).is_err());
}

#[tokio::test]
async fn test_missing_price_serves_zero_price() {
    let server = start_mock_server().await;
    mock_graphql_response(&server, "vault_yvdai").await;
    let base = spawn_app(&server, "reference_no_prices", &[]).await;

    let response = get(&format!("{base}/1/vaults/{YV_DAI}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["tvl"]["price"], "0");
    assert_eq!(body["tvl"]["tvl"], "0");
    assert_eq!(body["display_name"], "DAI");
    assert_eq!(body["apy"]["net_apy"], "0.0248");
    assert_eq!(body["token"]["display_name"], "Dai");
}

#[tokio::test]
async fn test_invalid_chain_id_is_400_without_upstream_call() {
    let server = start_mock_server().await;
    expect_no_requests(&server).await;
    let base = spawn_app(&server, "reference", &[]).await;

    let response = get(&format!("{base}/abc/vaults/{YV_DAI}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.unwrap(), "invalid chainID");
}

#[tokio::test]
async fn test_invalid_address_is_400() {
    let server = start_mock_server().await;
    expect_no_requests(&server).await;
    let base = spawn_app(&server, "reference", &[]).await;

    let response = get(&format!("{base}/1/vaults/0xnot-an-address")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.unwrap(), "invalid address");
}

#[tokio::test]
async fn test_blacklisted_address_is_400() {
    let server = start_mock_server().await;
    expect_no_requests(&server).await;
    let base = spawn_app(
        &server,
        "reference",
        &["--blacklist", "1=0xda816459f1ab5631232fe5e97a05bbbb94970c95"],
    )
    .await;

    let shouting = YV_DAI.to_uppercase().replacen("0X", "0x", 1);
    let response = get(&format!("{base}/1/vaults/{shouting}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.unwrap(), "invalid address");
}

#[tokio::test]
async fn test_unsupported_chain_is_400() {
    let server = start_mock_server().await;
    expect_no_requests(&server).await;
    let base = spawn_app(&server, "reference", &[]).await;

    let response = get(&format!("{base}/250/vaults/{YV_DAI}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_vault_is_404() {
    let server = start_mock_server().await;
    mock_graphql_response(&server, "vault_null").await;
    let base = spawn_app(&server, "reference", &[]).await;

    let response = get(&format!("{base}/1/vaults/{YV_DAI}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text().await.unwrap(), "vault not found");
}

#[tokio::test]
async fn test_health_and_fallback() {
    let server = start_mock_server().await;
    let base = spawn_app(&server, "reference", &[]).await;

    assert_eq!(get(&format!("{base}/health")).await.status(), StatusCode::OK);
    assert_eq!(
        get(&format!("{base}/1/vaults")).await.status(),
        StatusCode::NOT_FOUND
    );
}
