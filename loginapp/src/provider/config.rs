use std::sync::LazyLock;

pub(super) static FIREBASE_API_KEY: LazyLock<String> =
    LazyLock::new(|| std::env::var("FIREBASE_API_KEY").unwrap_or_default());

/// Overrides the Identity Toolkit endpoint, e.g. for the Firebase Auth emulator.
/// An empty value keeps the default endpoint.
pub(super) static FIREBASE_ENDPOINT: LazyLock<String> =
    LazyLock::new(|| std::env::var("FIREBASE_ENDPOINT").unwrap_or_default());

/// Either a Supabase project reference (`abcdefghijklmnop`) or a full GoTrue URL
/// for self-hosted setups.
pub(super) static SUPABASE_PROJECT_REFERENCE: LazyLock<String> = LazyLock::new(|| {
    std::env::var("SUPABASE_PROJECT_REFERENCE")
        .unwrap_or_else(|_| "http://localhost:7070".to_string())
});

pub(super) static SUPABASE_API_KEY: LazyLock<String> =
    LazyLock::new(|| std::env::var("SUPABASE_API_KEY").unwrap_or_default());

pub(super) static POCKETBASE_URL: LazyLock<String> = LazyLock::new(|| {
    std::env::var("POCKETBASE_URL").unwrap_or_else(|_| "http://localhost:7070".to_string())
});

/// Deadline for a single outbound provider call, in seconds.
pub(super) static PROVIDER_TIMEOUT_SECS: LazyLock<u64> = LazyLock::new(|| {
    std::env::var("PROVIDER_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(30)
});
