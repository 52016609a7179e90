use std::time::Duration;

use crate::provider::errors::ProviderError;

/// Creates the HTTP client shared by the provider adapters.
///
/// - `timeout`: deadline for a whole provider call, connect through body. A provider
///   that stops answering fails the login instead of holding the request open.
/// - `pool_idle_timeout`: 90 seconds, the reqwest default, stated explicitly.
/// - `pool_max_idle_per_host`: 32 idle connections per provider host.
pub fn build_provider_client(timeout: Duration) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .pool_idle_timeout(Duration::from_secs(90))
        .pool_max_idle_per_host(32)
        .build()
        .map_err(|e| ProviderError::Config(format!("Failed to create HTTP client: {e}")))
}

/// Joins a base URL and an absolute path without doubling the slash.
pub(super) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
