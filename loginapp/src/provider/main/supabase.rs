use async_trait::async_trait;

use crate::gotrue::GoTrueClient;
use crate::provider::errors::ProviderError;
use crate::provider::types::{Credentials, ProviderKind, Subject};

use super::ProviderAdapter;

/// Supabase Auth, delegated to a [`GoTrueClient`].
///
/// The adapter builds no requests itself; it only maps the client's session
/// response to a [`Subject`].
#[derive(Debug, Clone)]
pub struct SupabaseAdapter {
    client: GoTrueClient,
}

impl SupabaseAdapter {
    pub fn new(client: GoTrueClient) -> Self {
        Self { client }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

#[async_trait]
impl ProviderAdapter for SupabaseAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Supabase
    }

    #[tracing::instrument(skip_all, fields(provider = "supabase"))]
    async fn authenticate(&self, credentials: &Credentials) -> Result<Subject, ProviderError> {
        let session = self
            .client
            .sign_in_with_email_password(&credentials.email, &credentials.password)
            .await?;

        tracing::debug!(
            "Supabase sign-in succeeded: user_id={}, role={}, expires_in={}",
            session.user.id,
            session.user.role,
            session.expires_in
        );

        Subject::new(session.user.id.to_string())
            .ok_or_else(|| ProviderError::Decode("empty user id".to_string()))
    }
}
