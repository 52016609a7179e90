use std::sync::LazyLock;

/// Name of the cookie that carries the session subject.
pub const SESSION_COOKIE_NAME: &str = "__session__";

const DEFAULT_SESSION_COOKIE_MAX_AGE: u64 = 7 * 24 * 60 * 60;

/// Session lifetime in seconds. Default: 7 days.
pub static SESSION_COOKIE_MAX_AGE: LazyLock<u64> = LazyLock::new(|| {
    parse_max_age(std::env::var("SESSION_COOKIE_MAX_AGE").ok().as_deref())
});

fn parse_max_age(value: Option<&str>) -> u64 {
    value
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SESSION_COOKIE_MAX_AGE)
}
