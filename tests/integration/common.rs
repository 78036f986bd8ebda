//! Shared helpers for the integration suite.

use std::sync::Once;

use salesforce_resty::{Credentials, RestExplorer};
use wiremock::MockServer;

static TRACING: Once = Once::new();

/// Credentials pointing at a mock server.
pub fn credentials_for(server: &MockServer) -> Credentials {
    Credentials::new(server.uri(), "integration-token", "60.0")
}

/// An explorer with default configuration. Run with RUST_LOG=debug to see
/// request and pagination traces.
pub fn explorer() -> RestExplorer {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
    RestExplorer::new().expect("Failed to create explorer")
}
