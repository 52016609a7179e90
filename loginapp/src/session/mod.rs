mod config;
mod errors;
mod main;
mod types;

pub use config::{SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME};
pub use errors::SessionError;
pub use main::{
    get_subject_from_headers, issue_session_headers, prepare_logout_response,
    refresh_session_headers,
};
pub use types::Session;
