//! Session state machine mounted on `/`
//!
//! A request is Anonymous or Authenticated depending on whether it carries the
//! session cookie. Each HTTP method is one transition; only POST talks to a
//! provider.

use axum::{
    Form, Router,
    extract::{State, rejection::FormRejection},
    http::{HeaderMap, HeaderValue, StatusCode, header::LOCATION},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;

use loginapp::{
    Credentials, ProviderKind, Providers, issue_session_headers, prepare_logout_response,
    refresh_session_headers,
};

use crate::error::IntoResponseError;
use crate::pages::{login_page, session_page};
use crate::session::AuthSubject;

const SESSION_ROUTE: &str = "/";

/// Owns the provider adapters and serves the session endpoints.
#[derive(Clone, Debug)]
pub struct SessionDispatcher {
    providers: Providers,
}

/// Login form body. Missing fields deserialize as empty and are rejected by the
/// handler with 400.
#[derive(Deserialize)]
struct LoginForm {
    #[serde(default)]
    base: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

impl SessionDispatcher {
    pub fn new(providers: Providers) -> Self {
        Self { providers }
    }

    /// Router serving GET/POST/PATCH/PUT/DELETE on `/`. Other methods get 405.
    pub fn into_router(self) -> Router {
        Router::new()
            .route(
                SESSION_ROUTE,
                get(view)
                    .post(login)
                    .patch(verify)
                    .put(refresh)
                    .delete(logout),
            )
            .with_state(self)
    }
}

/// GET: login form for anonymous requests, session controls otherwise.
async fn view(auth: Option<AuthSubject>) -> Result<Html<String>, (StatusCode, String)> {
    match auth {
        Some(auth) => {
            tracing::debug!("Session found for subject {}", auth.subject);
            session_page(SESSION_ROUTE)
        }
        None => login_page(SESSION_ROUTE),
    }
}

/// POST: authenticate with the selected provider and start a session.
async fn login(
    State(dispatcher): State<SessionDispatcher>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Response, (StatusCode, String)> {
    let Form(form) = form.map_err(|e| {
        tracing::debug!("Invalid login form: {}", e);
        (StatusCode::BAD_REQUEST, e.body_text())
    })?;

    tracing::debug!("Login requested with base {:?}", form.base);
    let kind = form.base.parse::<ProviderKind>().into_response_error()?;

    let credentials = Credentials::new(form.email, form.password);
    if !credentials.is_complete() {
        return Err((
            StatusCode::BAD_REQUEST,
            "email and password are required".to_string(),
        ));
    }

    let subject = dispatcher
        .providers
        .authenticate(kind, &credentials)
        .await
        .into_response_error()?;

    let mut headers = issue_session_headers(subject).into_response_error()?;
    headers.insert(LOCATION, HeaderValue::from_static(SESSION_ROUTE));
    Ok((StatusCode::FOUND, headers).into_response())
}

/// PATCH: the session is valid if the cookie is there.
async fn verify(auth: AuthSubject) -> StatusCode {
    tracing::debug!("Session verified for subject {}", auth.subject);
    StatusCode::OK
}

/// PUT: re-issue the same subject with a fresh expiry.
async fn refresh(headers: HeaderMap) -> Result<Response, (StatusCode, String)> {
    match refresh_session_headers(&headers).into_response_error()? {
        Some(headers) => Ok((headers, StatusCode::OK).into_response()),
        None => Err((StatusCode::UNAUTHORIZED, "Unauthorized".to_string())),
    }
}

/// DELETE: drop the cookie whether or not there was a session.
async fn logout() -> Result<Response, (StatusCode, String)> {
    let headers = prepare_logout_response().into_response_error()?;
    Ok((headers, StatusCode::OK).into_response())
}
