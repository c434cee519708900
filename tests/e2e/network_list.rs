use axum::http::{Method, StatusCode};
use rosetta_core::{Database as _, NetworkIdentifier, NetworkSet, CARDANO, MAINNET};
use serde_json::json;

use crate::harness::{setup_database, setup_server_with_networks, Suite};

fn cardano_mainnet() -> serde_json::Value {
    json!({ "network_identifiers": [{ "network": MAINNET, "blockchain": CARDANO }] })
}

#[tokio::test]
async fn empty_request_body_returns_cardano_mainnet() {
    let suite = Suite::setup().await;

    let response = suite
        .server
        .inject(Method::POST, "/network/list", json!({}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<serde_json::Value>(), cardano_mainnet());

    suite.teardown().await;
}

#[tokio::test]
async fn empty_metadata_returns_cardano_mainnet() {
    let suite = Suite::setup().await;

    let response = suite
        .server
        .inject(Method::POST, "/network/list", json!({ "metadata": {} }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<serde_json::Value>(), cardano_mainnet());

    suite.teardown().await;
}

#[tokio::test]
async fn trailing_slash_is_normalized() {
    let suite = Suite::setup().await;

    let response = suite
        .server
        .inject(Method::POST, "/network/list/", json!({}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<serde_json::Value>(), cardano_mainnet());

    suite.teardown().await;
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let suite = Suite::setup().await;

    let first = suite
        .server
        .inject(Method::POST, "/network/list", json!({}))
        .await;
    let second = suite
        .server
        .inject(Method::POST, "/network/list", json!({}))
        .await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body, second.body);

    suite.teardown().await;
}

#[tokio::test]
async fn trailing_fields_are_ignored() {
    let suite = Suite::setup().await;

    let response = suite
        .server
        .inject(
            Method::POST,
            "/network/list",
            json!({ "metadata": { "source": "e2e" }, "unexpected": [1, 2, 3] }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<serde_json::Value>(), cardano_mainnet());

    suite.teardown().await;
}

#[tokio::test]
async fn non_object_body_is_rejected() {
    let suite = Suite::setup().await;

    let response = suite
        .server
        .inject(Method::POST, "/network/list", json!(["cardano"]))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<serde_json::Value>()["code"], json!(4003));

    suite.teardown().await;
}

#[tokio::test]
async fn every_configured_network_is_listed() {
    let database = setup_database().await;
    let networks = NetworkSet::new(vec![
        NetworkIdentifier::new(CARDANO, "preprod"),
        NetworkIdentifier::cardano_mainnet(),
    ])
    .unwrap();
    let server = setup_server_with_networks(&database, networks);

    let response = server
        .inject(Method::POST, "/network/list", json!({}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({
            "network_identifiers": [
                { "network": "preprod", "blockchain": "cardano" },
                { "network": "mainnet", "blockchain": "cardano" }
            ]
        })
    );

    database.close().await.expect("failed to close test database");
}
