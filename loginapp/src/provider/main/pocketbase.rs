use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::provider::errors::ProviderError;
use crate::provider::types::{Credentials, ProviderKind, Subject};

use super::ProviderAdapter;
use super::utils::join_url;

const AUTH_WITH_PASSWORD_PATH: &str = "/api/collections/users/auth-with-password";

/// Pocketbase password authentication against the `users` auth collection.
///
/// ref: <https://pocketbase.io/docs/api-records/#auth-with-password>
#[derive(Debug, Clone)]
pub struct PocketbaseAdapter {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct AuthWithPasswordRequest<'a> {
    identity: &'a str,
    password: &'a str,
}

/// Only the record id is read; the auth token and other record fields are ignored.
#[derive(Debug, Deserialize)]
struct AuthWithPasswordResponse {
    record: AuthRecord,
}

#[derive(Debug, Deserialize)]
struct AuthRecord {
    id: String,
}

impl PocketbaseAdapter {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ProviderAdapter for PocketbaseAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Pocketbase
    }

    #[tracing::instrument(skip_all, fields(provider = "pocketbase"))]
    async fn authenticate(&self, credentials: &Credentials) -> Result<Subject, ProviderError> {
        let request = AuthWithPasswordRequest {
            identity: &credentials.email,
            password: &credentials.password,
        };

        let response = self
            .client
            .post(join_url(&self.base_url, AUTH_WITH_PASSWORD_PATH))
            .json(&request)
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            tracing::debug!("Pocketbase auth rejected: {}", response.status());
            return Err(ProviderError::Rejected(format!(
                "unexpected status code: {}",
                response.status().as_u16()
            )));
        }

        let body: AuthWithPasswordResponse = response.json().await?;
        let record = body.record;
        tracing::debug!("Pocketbase auth succeeded: record_id={}", record.id);

        Subject::new(record.id).ok_or_else(|| ProviderError::Decode("empty record id".to_string()))
    }
}
