mod firebase;
mod pocketbase;
mod supabase;
mod utils;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::gotrue::GoTrueClient;
use crate::provider::config::{
    FIREBASE_API_KEY, FIREBASE_ENDPOINT, POCKETBASE_URL, PROVIDER_TIMEOUT_SECS, SUPABASE_API_KEY,
    SUPABASE_PROJECT_REFERENCE,
};
use crate::provider::errors::ProviderError;
use crate::provider::types::{Credentials, ProviderKind, Subject};

pub use firebase::{FIREBASE_DEFAULT_ENDPOINT, FirebaseAdapter};
pub use pocketbase::PocketbaseAdapter;
pub use supabase::SupabaseAdapter;
pub use utils::build_provider_client;

/// Turns email/password credentials into a provider subject.
///
/// Implementations hold only immutable configuration and an HTTP client, so a single
/// instance is shared by all requests.
#[async_trait]
pub trait ProviderAdapter: Send + Sync + 'static {
    /// Which provider this adapter talks to.
    fn kind(&self) -> ProviderKind;

    /// Authenticate the credentials against the provider.
    ///
    /// Returns the provider's subject identifier on success. Transport failures,
    /// rejected credentials and undecodable responses are all errors.
    async fn authenticate(&self, credentials: &Credentials) -> Result<Subject, ProviderError>;
}

/// One adapter per [`ProviderKind`].
///
/// Cloning is cheap; the adapters are shared behind `Arc`.
#[derive(Clone)]
pub struct Providers {
    firebase: Arc<dyn ProviderAdapter>,
    supabase: Arc<dyn ProviderAdapter>,
    pocketbase: Arc<dyn ProviderAdapter>,
}

impl Providers {
    pub fn new(
        firebase: Arc<dyn ProviderAdapter>,
        supabase: Arc<dyn ProviderAdapter>,
        pocketbase: Arc<dyn ProviderAdapter>,
    ) -> Self {
        Self {
            firebase,
            supabase,
            pocketbase,
        }
    }

    /// Build all three adapters from the environment.
    ///
    /// # Environment
    /// * `FIREBASE_API_KEY`, `FIREBASE_ENDPOINT`
    /// * `SUPABASE_PROJECT_REFERENCE`, `SUPABASE_API_KEY`
    /// * `POCKETBASE_URL`
    /// * `PROVIDER_TIMEOUT_SECS` - deadline for each outbound call
    pub fn from_env() -> Result<Self, ProviderError> {
        let client = build_provider_client(Duration::from_secs(*PROVIDER_TIMEOUT_SECS))?;

        let firebase = FirebaseAdapter::new(client.clone(), FIREBASE_API_KEY.as_str())
            .with_endpoint(FIREBASE_ENDPOINT.as_str());
        let supabase = SupabaseAdapter::new(GoTrueClient::new(
            client.clone(),
            SUPABASE_PROJECT_REFERENCE.as_str(),
            SUPABASE_API_KEY.as_str(),
        ));
        let pocketbase = PocketbaseAdapter::new(client, POCKETBASE_URL.as_str());

        tracing::info!(
            "Providers configured: firebase={}, supabase={}, pocketbase={}",
            firebase.endpoint(),
            supabase.base_url(),
            pocketbase.base_url()
        );

        Ok(Self::new(
            Arc::new(firebase),
            Arc::new(supabase),
            Arc::new(pocketbase),
        ))
    }

    pub fn get(&self, kind: ProviderKind) -> &dyn ProviderAdapter {
        match kind {
            ProviderKind::Firebase => self.firebase.as_ref(),
            ProviderKind::Supabase => self.supabase.as_ref(),
            ProviderKind::Pocketbase => self.pocketbase.as_ref(),
        }
    }

    /// Authenticate with the adapter selected by `kind`.
    pub async fn authenticate(
        &self,
        kind: ProviderKind,
        credentials: &Credentials,
    ) -> Result<Subject, ProviderError> {
        let result = self.get(kind).authenticate(credentials).await;
        match &result {
            Ok(subject) => tracing::info!("Authenticated via {kind}: subject={subject}"),
            Err(e) => tracing::warn!("Authentication via {kind} failed: {e}"),
        }
        result
    }
}

impl std::fmt::Debug for Providers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Providers")
            .field("firebase", &self.firebase.kind())
            .field("supabase", &self.supabase.kind())
            .field("pocketbase", &self.pocketbase.kind())
            .finish()
    }
}
