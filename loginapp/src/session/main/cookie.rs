use headers::HeaderMapExt;
use http::header::{HeaderMap, HeaderValue, SET_COOKIE};

use crate::provider::Subject;
use crate::session::config::SESSION_COOKIE_NAME;
use crate::session::errors::SessionError;
use crate::session::types::Session;

const COOKIE_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

const SESSION_COOKIE_ATTRIBUTES: &str = "Path=/; HttpOnly; Secure; SameSite=Strict";

/// RFC 6265 `cookie-octet`.
fn is_cookie_octet(b: u8) -> bool {
    matches!(b, 0x21 | 0x23..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E)
}

fn encode_session_cookie(session: &Session) -> Result<HeaderValue, SessionError> {
    let value = session.subject.as_str();
    if !value.bytes().all(is_cookie_octet) {
        tracing::error!("Subject cannot be stored in a cookie: {:?}", value);
        return Err(SessionError::Cookie(
            "Subject contains characters not allowed in a cookie value".to_string(),
        ));
    }

    let cookie = format!(
        "{SESSION_COOKIE_NAME}={value}; Expires={}; {SESSION_COOKIE_ATTRIBUTES}",
        session.expires_at.format(COOKIE_DATE_FORMAT)
    );
    cookie
        .parse()
        .map_err(|_| SessionError::Cookie("Failed to parse cookie".to_string()))
}

fn encode_expired_cookie() -> Result<HeaderValue, SessionError> {
    let cookie = format!(
        "{SESSION_COOKIE_NAME}=; Max-Age=-1; Expires=Thu, 01 Jan 1970 00:00:00 GMT; {SESSION_COOKIE_ATTRIBUTES}"
    );
    cookie
        .parse()
        .map_err(|_| SessionError::Cookie("Failed to parse cookie".to_string()))
}

fn header_set_cookie(value: HeaderValue) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.append(SET_COOKIE, value);
    headers
}

/// Reads the session subject from the request's `Cookie` header(s).
///
/// Presence is all that is checked: the value is unsigned and the browser is
/// trusted to drop expired cookies. An empty value counts as no session.
pub fn get_subject_from_headers(headers: &HeaderMap) -> Option<Subject> {
    let Some(cookies) = headers.typed_get::<headers::Cookie>() else {
        tracing::debug!("No cookie header found");
        return None;
    };

    let subject = cookies.get(SESSION_COOKIE_NAME).and_then(Subject::new);
    if subject.is_none() {
        tracing::debug!("No session cookie '{}' found in cookies", SESSION_COOKIE_NAME);
    }
    subject
}

/// Creates a session for `subject` and returns the `Set-Cookie` headers for it.
#[tracing::instrument(skip_all, fields(subject = %subject))]
pub fn issue_session_headers(subject: Subject) -> Result<HeaderMap, SessionError> {
    session_headers(&Session::issue(subject))
}

fn session_headers(session: &Session) -> Result<HeaderMap, SessionError> {
    let headers = header_set_cookie(encode_session_cookie(session)?);
    tracing::debug!("Issued session cookie, expires at {}", session.expires_at);
    Ok(headers)
}

/// Re-issues the request's session with a fresh expiry.
///
/// Returns `Ok(None)` when the request carries no session.
pub fn refresh_session_headers(headers: &HeaderMap) -> Result<Option<HeaderMap>, SessionError> {
    let Some(subject) = get_subject_from_headers(headers) else {
        return Ok(None);
    };
    session_headers(&Session::issue(subject)).map(Some)
}

/// Headers that make the browser drop the session cookie immediately.
pub fn prepare_logout_response() -> Result<HeaderMap, SessionError> {
    Ok(header_set_cookie(encode_expired_cookie()?))
}
