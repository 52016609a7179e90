use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::provider::errors::ProviderError;
use crate::provider::types::{Credentials, ProviderKind, Subject};

use super::ProviderAdapter;
use super::utils::join_url;

pub const FIREBASE_DEFAULT_ENDPOINT: &str = "https://identitytoolkit.googleapis.com";

const SIGN_IN_WITH_PASSWORD_PATH: &str = "/v1/accounts:signInWithPassword";

/// Firebase Authentication through the Identity Toolkit REST API.
///
/// ref: <https://firebase.google.com/docs/reference/rest/auth#section-sign-in-email-password>
#[derive(Debug, Clone)]
pub struct FirebaseAdapter {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInWithPasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

/// Only `localId` is read; the tokens and profile fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInWithPasswordResponse {
    local_id: String,
}

impl FirebaseAdapter {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: FIREBASE_DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Point the adapter at another Identity Toolkit endpoint (e.g. the emulator).
    /// An empty endpoint keeps the current one.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        if !endpoint.is_empty() {
            self.endpoint = endpoint.to_string();
        }
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn sign_in_url(&self) -> Result<Url, ProviderError> {
        Url::parse_with_params(
            &join_url(&self.endpoint, SIGN_IN_WITH_PASSWORD_PATH),
            &[("key", self.api_key.as_str())],
        )
        .map_err(|e| ProviderError::Config(format!("Invalid Firebase endpoint: {e}")))
    }
}

#[async_trait]
impl ProviderAdapter for FirebaseAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Firebase
    }

    #[tracing::instrument(skip_all, fields(provider = "firebase"))]
    async fn authenticate(&self, credentials: &Credentials) -> Result<Subject, ProviderError> {
        let request = SignInWithPasswordRequest {
            email: &credentials.email,
            password: &credentials.password,
            return_secure_token: true,
        };

        let response = self
            .client
            .post(self.sign_in_url()?)
            .json(&request)
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            tracing::debug!("Firebase sign-in rejected: {}", response.status());
            return Err(ProviderError::Rejected(format!(
                "status code: {}",
                response.status().as_u16()
            )));
        }

        let body: SignInWithPasswordResponse = response.json().await?;

        tracing::debug!("Firebase sign-in succeeded: local_id={}", body.local_id);

        Subject::new(body.local_id)
            .ok_or_else(|| ProviderError::Decode("empty localId".to_string()))
    }
}
