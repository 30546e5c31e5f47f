//! Common test utilities for integration tests.
//!
//! Fixture JSON bodies for the three operations plus builders that wire
//! a gateway or store to a [`MockHttpClient`].

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use bytes::Bytes;
use topshot::adapters::mock::{MockHttpClient, MockResponse};
use topshot::traits::Response;
use topshot::{GatewayConfig, PlayerGateway, PlayerStore};

pub const MOCK_ENDPOINT: &str = "http://mock.test/graphql";

/// Initialize tracing for tests. Safe to call from every test; only the
/// first call installs a subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// A roster response body from `(id, name)` pairs; a `None` name is
/// omitted from the entry entirely.
pub fn roster_body(players: &[(&str, Option<&str>)]) -> String {
    let entries: Vec<serde_json::Value> = players
        .iter()
        .map(|(id, name)| match name {
            Some(name) => serde_json::json!({"id": id, "name": name}),
            None => serde_json::json!({"id": id}),
        })
        .collect();
    serde_json::json!({"data": {"allPlayers": {"data": entries}}}).to_string()
}

/// A detail response body with the given fields present.
pub fn detail_body(fields: serde_json::Value) -> String {
    serde_json::json!({
        "data": {"getPlayerDataWithCurrentStats": {"playerData": fields}}
    })
    .to_string()
}

/// A detail response body for a player the server does not know.
pub fn missing_detail_body() -> String {
    serde_json::json!({
        "data": {"getPlayerDataWithCurrentStats": {"playerData": null}}
    })
    .to_string()
}

/// A moments response body from raw moment entries.
pub fn moments_body(entries: &[serde_json::Value]) -> String {
    serde_json::json!({
        "data": {"searchMintedMoments": {"data": {"searchSummary": {"data": {"data": entries}}}}}
    })
    .to_string()
}

/// Wrap a JSON body in a 200 mock response.
pub fn ok_response(body: String) -> MockResponse {
    MockResponse::Success(Response::new(200, Bytes::from(body)))
}

/// A gateway over the given mock client, pointed at the mock endpoint.
pub fn mock_gateway(http: &MockHttpClient) -> PlayerGateway {
    PlayerGateway::new(
        GatewayConfig::default().with_endpoint(MOCK_ENDPOINT),
        Arc::new(http.clone()),
    )
}

/// A store over the given mock client.
pub fn mock_store(http: &MockHttpClient) -> PlayerStore {
    PlayerStore::new(Arc::new(mock_gateway(http)))
}
