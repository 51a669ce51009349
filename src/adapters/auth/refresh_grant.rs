use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use error_stack::{report, ResultExt};
use serde::Deserialize;
use tracing::instrument;

use crate::domain::credential::Credential;
use crate::ports::credential_source::{AuthError, CredentialSource};

use super::client_secret::read_client_secret;

/// Body of a successful `grant_type=refresh_token` exchange.
#[derive(Debug, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

impl RefreshResponse {
    pub fn into_credential(self, previous: &Credential, now: DateTime<Utc>) -> Credential {
        let expires_at = self
            .expires_in
            .map(|seconds| now + Duration::seconds(seconds));
        previous.refreshed(self.access_token, self.refresh_token, expires_at)
    }
}

/// Exchanges the cached refresh token at the client secret's token endpoint.
pub struct RefreshTokenSource {
    client_secret: PathBuf,
    http: reqwest::Client,
}

impl RefreshTokenSource {
    pub fn new(client_secret: impl Into<PathBuf>) -> Self {
        Self {
            client_secret: client_secret.into(),
            http: reqwest::Client::new(),
        }
    }
}

impl std::fmt::Debug for RefreshTokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshTokenSource")
            .field("client_secret", &self.client_secret)
            .finish()
    }
}

#[async_trait::async_trait]
impl CredentialSource for RefreshTokenSource {
    fn name(&self) -> &'static str {
        "token refresh"
    }

    #[instrument(name = "RefreshTokenSource::acquire", skip(cached))]
    async fn acquire(
        &self,
        cached: Option<&Credential>,
    ) -> error_stack::Result<Credential, AuthError> {
        let (previous, refresh_token) = cached
            .and_then(|credential| {
                credential
                    .refresh_token
                    .as_deref()
                    .filter(|token| !token.is_empty())
                    .map(|token| (credential, token))
            })
            .ok_or_else(|| report!(AuthError::MissingRefreshToken))?;

        let secret = read_client_secret(&self.client_secret).await?;

        let response = self
            .http
            .post(&secret.token_uri)
            .form(&[
                ("client_id", secret.client_id.as_str()),
                ("client_secret", secret.client_secret.as_str()),
                ("refresh_token", refresh_token),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .change_context(AuthError::RefreshFailed)
            .attach_printable_lazy(|| format!("Token endpoint: {}", secret.token_uri))?
            .json::<RefreshResponse>()
            .await
            .change_context(AuthError::RefreshFailed)
            .attach_printable("Unexpected token endpoint response")?;

        Ok(response.into_credential(previous, Utc::now()))
    }
}
