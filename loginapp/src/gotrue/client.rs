use super::errors::GoTrueError;
use super::types::{GoTrueErrorBody, GoTrueTokenResponse, PasswordGrantRequest};

/// Client for one Supabase project's auth server.
#[derive(Debug, Clone)]
pub struct GoTrueClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GoTrueClient {
    /// `project_reference` is either the project ref of a hosted project, which maps to
    /// `https://<ref>.supabase.co/auth/v1`, or the full URL of a GoTrue server.
    pub fn new(http: reqwest::Client, project_reference: &str, api_key: &str) -> Self {
        Self {
            http,
            base_url: auth_base_url(project_reference),
            api_key: api_key.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Password grant: `POST {base}/token?grant_type=password`.
    pub async fn sign_in_with_email_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<GoTrueTokenResponse, GoTrueError> {
        let url = format!("{}/token", self.base_url);

        let mut request = self
            .http
            .post(url)
            .query(&[("grant_type", "password")])
            .json(&PasswordGrantRequest { email, password });
        if !self.api_key.is_empty() {
            request = request
                .header("apikey", &self.api_key)
                .bearer_auth(&self.api_key);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GoTrueErrorBody>(&body)
                .ok()
                .and_then(|b| b.message())
                .unwrap_or_else(|| status.to_string());
            tracing::debug!("GoTrue password grant failed: {status} {message}");
            return Err(GoTrueError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

fn auth_base_url(project_reference: &str) -> String {
    let reference = project_reference.trim_end_matches('/');
    if reference.starts_with("http://") || reference.starts_with("https://") {
        reference.to_string()
    } else {
        format!("https://{reference}.supabase.co/auth/v1")
    }
}
