//! Test utilities for route-level testing.

use axum_test::TestServer;
use url::Url;
use wiremock::MockServer;

use crate::{AppState, Config, build_router};

/// Config with store credentials fully present (still pointing at the real
/// default collaborator URLs; tests that make outbound calls should use
/// [`test_config_with_collaborators`]).
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.store.api_key = Some("patTEST".to_string());
    config.store.base_id = Some("appBASE".to_string());
    config.store.table_name = Some("Documents".to_string());
    config
}

/// Config whose upload and store collaborators point at mock servers.
pub fn test_config_with_collaborators(file_host: &MockServer, store: &MockServer) -> Config {
    let mut config = test_config();
    config.upload.endpoint = Url::parse(&file_host.uri()).expect("mock server URI");
    config.store.api_url = Url::parse(&store.uri()).expect("mock server URI");
    config
}

pub fn create_test_app(config: Config) -> TestServer {
    let http = reqwest::Client::new();
    let state = AppState::builder().config(config).http(http).build();
    TestServer::new(build_router(state)).expect("Failed to create test server")
}
