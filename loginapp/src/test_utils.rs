//! Test helpers shared by the provider adapter tests
//!
//! Each test spins up its own axum server on an ephemeral port that stands in for
//! the provider, so adapters are exercised over real HTTP without network access.

use std::time::Duration;

use axum::Router;

use crate::provider::build_provider_client;

/// Serve `router` on `127.0.0.1:<random port>` and return its base URL.
pub(crate) async fn spawn_mock_provider(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock provider");
    let addr = listener
        .local_addr()
        .expect("Failed to read mock provider address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Mock provider stopped");
    });

    format!("http://{addr}")
}

/// Base URL on which nothing is listening.
pub(crate) async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener
        .local_addr()
        .expect("Failed to read probe address");
    drop(listener);
    format!("http://{addr}")
}

pub(crate) fn test_client() -> reqwest::Client {
    build_provider_client(Duration::from_secs(5)).expect("Failed to build test client")
}
