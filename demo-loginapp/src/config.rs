use std::sync::LazyLock;

pub(crate) static PORT: LazyLock<u16> = LazyLock::new(|| {
    std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080)
});

/// How long in-flight requests may run after a shutdown signal.
pub(crate) static SHUTDOWN_GRACE_SECS: LazyLock<u64> = LazyLock::new(|| {
    std::env::var("SHUTDOWN_GRACE_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5)
});
