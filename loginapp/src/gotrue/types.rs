use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub(super) struct PasswordGrantRequest<'a> {
    pub(super) email: &'a str,
    pub(super) password: &'a str,
}

/// Session returned by `POST /token?grant_type=password`.
#[derive(Debug, Clone, Deserialize)]
pub struct GoTrueTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub refresh_token: String,
    pub user: GoTrueUser,
}

/// The subset of the GoTrue user object this crate reads.
#[derive(Debug, Clone, Deserialize)]
pub struct GoTrueUser {
    pub id: Uuid,
    #[serde(default)]
    pub aud: String,
    #[serde(default)]
    pub role: String,
    pub email: Option<String>,
    pub email_confirmed_at: Option<String>,
    pub last_sign_in_at: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Error body. GoTrue versions disagree on the field names, so all are optional.
#[derive(Debug, Default, Deserialize)]
pub(super) struct GoTrueErrorBody {
    pub(super) error: Option<String>,
    pub(super) error_description: Option<String>,
    pub(super) error_code: Option<String>,
    pub(super) msg: Option<String>,
    pub(super) message: Option<String>,
}

impl GoTrueErrorBody {
    pub(super) fn message(&self) -> Option<String> {
        let text = self
            .error_description
            .as_ref()
            .or(self.msg.as_ref())
            .or(self.message.as_ref())
            .or(self.error.as_ref())?;
        match &self.error_code {
            Some(code) => Some(format!("{code}: {text}")),
            None => Some(text.clone()),
        }
    }
}
