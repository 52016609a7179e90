use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum GoTrueError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("response status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("decode failed: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for GoTrueError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}
