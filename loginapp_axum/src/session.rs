use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    response::{IntoResponse, Response},
};
use http::{StatusCode, request::Parts};

use loginapp::{Subject, get_subject_from_headers};

/// Rejection for requests without a session cookie.
#[derive(Debug)]
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        tracing::debug!("Unauthorized");
        (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
    }
}

/// The subject of the request's session, available as an Axum extractor
///
/// Extraction succeeds whenever the session cookie is present and non-empty. The
/// value is not verified against the provider, and the cookie is not signed, so a
/// client can claim any subject. Use `Option<AuthSubject>` to accept anonymous
/// requests too.
///
/// # Example
///
/// ```no_run
/// use axum::{routing::get, Router};
/// use loginapp_axum::AuthSubject;
///
/// async fn whoami(auth: AuthSubject) -> String {
///     auth.subject.to_string()
/// }
///
/// let app: Router = Router::new().route("/whoami", get(whoami));
/// ```
#[derive(Clone, Debug)]
pub struct AuthSubject {
    pub subject: Subject,
}

impl<S> FromRequestParts<S> for AuthSubject
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        get_subject_from_headers(&parts.headers)
            .map(|subject| AuthSubject { subject })
            .ok_or(AuthRejection)
    }
}

impl<S> OptionalFromRequestParts<S> for AuthSubject
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(get_subject_from_headers(&parts.headers).map(|subject| AuthSubject { subject }))
    }
}
