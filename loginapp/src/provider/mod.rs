mod config;
mod errors;
mod main;
mod types;

pub use errors::{ProviderError, ProviderKindError};
pub use main::{
    FIREBASE_DEFAULT_ENDPOINT, FirebaseAdapter, PocketbaseAdapter, ProviderAdapter, Providers,
    SupabaseAdapter, build_provider_client,
};
pub use types::{Credentials, ProviderKind, Subject};
