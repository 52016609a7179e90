use chrono::{DateTime, Duration, Utc};

use crate::provider::Subject;
use crate::session::config::SESSION_COOKIE_MAX_AGE;

/// A login as carried by the session cookie. There is no server-side record;
/// the cookie value is the subject and the cookie expiry is `expires_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub subject: Subject,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Start a session that lasts `SESSION_COOKIE_MAX_AGE` from now.
    pub fn issue(subject: Subject) -> Self {
        Self::issue_at(subject, Utc::now(), *SESSION_COOKIE_MAX_AGE)
    }

    pub(crate) fn issue_at(subject: Subject, now: DateTime<Utc>, max_age_secs: u64) -> Self {
        let expires_at = i64::try_from(max_age_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|max_age| now.checked_add_signed(max_age))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self {
            subject,
            expires_at,
        }
    }
}
