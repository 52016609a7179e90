use askama::Template;
use axum::{http::StatusCode, response::Html};

use loginapp::ProviderKind;

use crate::error::IntoResponseError;

#[derive(Template)]
#[template(path = "login.j2")]
struct LoginTemplate<'a> {
    action: &'a str,
    providers: &'a [ProviderKind],
}

#[derive(Template)]
#[template(path = "session.j2")]
struct SessionTemplate<'a> {
    action: &'a str,
}

/// Login form posting `base`, `email` and `password` to `action`.
pub(crate) fn login_page(action: &str) -> Result<Html<String>, (StatusCode, String)> {
    let template = LoginTemplate {
        action,
        providers: &ProviderKind::ALL,
    };
    Ok(Html(template.render().into_response_error()?))
}

/// Verify / refresh / logout buttons driving PATCH, PUT and DELETE on `action`.
pub(crate) fn session_page(action: &str) -> Result<Html<String>, (StatusCode, String)> {
    let template = SessionTemplate { action };
    Ok(Html(template.render().into_response_error()?))
}
