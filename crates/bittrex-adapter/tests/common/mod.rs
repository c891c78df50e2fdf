/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for bittrex-adapter tests

use bittrex_adapter::{BittrexClient, ClientConfig, Credentials};
use wiremock::MockServer;

pub const TEST_KEY: &str = "integration-test-key";
pub const TEST_SECRET: &str = "integration-test-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server, without credentials
pub fn public_client(server: &MockServer) -> BittrexClient {
    BittrexClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
}

/// Client pointed at the mock server, with test credentials set
#[allow(dead_code)]
pub fn signed_client(server: &MockServer) -> BittrexClient {
    let mut client = public_client(server);
    client.set_credentials(Credentials::new(TEST_KEY, TEST_SECRET));
    client
}
