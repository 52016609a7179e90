mod cookie;

pub use cookie::{
    get_subject_from_headers, issue_session_headers, prepare_logout_response,
    refresh_session_headers,
};
