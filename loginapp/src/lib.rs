//! loginapp - Provider-agnostic email/password login for Rust web applications
//!
//! This crate authenticates a user against one of several interchangeable identity
//! providers (Firebase, Supabase, Pocketbase) and represents the resulting login as a
//! single session cookie carrying the provider's subject identifier.
//!
//! The crate is framework-agnostic: it works on `http` types and leaves routing to an
//! integration crate such as `loginapp_axum`.

mod gotrue;
mod provider;
mod session;

#[cfg(test)]
mod test_utils;

pub use gotrue::{GoTrueClient, GoTrueError, GoTrueTokenResponse, GoTrueUser};

pub use provider::{
    Credentials, FIREBASE_DEFAULT_ENDPOINT, FirebaseAdapter, PocketbaseAdapter, ProviderAdapter,
    ProviderError, ProviderKind, ProviderKindError, Providers, Subject, SupabaseAdapter,
    build_provider_client,
};

pub use session::{
    SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME, Session, SessionError, get_subject_from_headers,
    issue_session_headers, prepare_logout_response, refresh_session_headers,
};
