use thiserror::Error;

use crate::gotrue::GoTrueError;

/// Failure of a single `authenticate` call.
///
/// The session layer does not tell these apart: every variant ends up as a failed
/// login. The distinction is kept for logging and for tests.
#[derive(Debug, Error, Clone)]
pub enum ProviderError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Do request: {0}")]
    Transport(String),

    #[error("{0}")]
    Rejected(String),

    #[error("Decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<GoTrueError> for ProviderError {
    fn from(err: GoTrueError) -> Self {
        let message = format!("sign in with email and password: {err}");
        match err {
            GoTrueError::Request(_) => Self::Transport(message),
            GoTrueError::Api { .. } => Self::Rejected(message),
            GoTrueError::Decode(_) => Self::Decode(message),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderKindError {
    #[error("Unknown provider: {0:?}")]
    Unknown(String),
}
