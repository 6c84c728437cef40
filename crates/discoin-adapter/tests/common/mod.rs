/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for discoin-adapter tests

use discoin_adapter::{ClientConfig, DiscoinClient, Revision};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Mock access token for testing
#[allow(dead_code)]
pub fn mock_token() -> String {
    "discoin-test-token".to_string()
}

/// Client of revision `R` pointed at the mock server
pub fn mock_client<R: Revision>(server: &MockServer) -> DiscoinClient<R> {
    DiscoinClient::<R>::with_config_and_base_url(&mock_token(), ClientConfig::default(), &server.uri())
        .expect("client init")
}

/// V3 transaction body as returned by the API
#[allow(dead_code)]
pub fn transaction_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "amount": 5,
        "user": "u1",
        "handled": false,
        "timestamp": "2020-01-01T12:00:00.000Z",
        "payout": 2.5,
        "from": {"id": "DTS", "name": "Dice", "value": 0.5, "reserve": 1000},
        "to": {"id": "XYZ", "name": "Xylo", "value": 1, "reserve": 250}
    })
}
