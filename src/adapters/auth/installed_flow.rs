use std::{io::IsTerminal, path::PathBuf, sync::Arc};

use chrono::{DateTime, Utc};
use error_stack::{report, ResultExt};
use google_sheets4::oauth2::{
    self,
    storage::{TokenInfo, TokenStorage},
    InstalledFlowReturnMethod,
};
use tokio::sync::Mutex;
use tracing::instrument;

use crate::domain::credential::Credential;
use crate::ports::credential_source::{AuthError, CredentialSource};

use super::{client_secret::read_client_secret, SCOPES};

/// Browser-based login through a local redirect listener.
pub struct InstalledFlowLogin {
    client_secret: PathBuf,
    interactive: bool,
}

impl InstalledFlowLogin {
    pub fn new(client_secret: impl Into<PathBuf>) -> Self {
        Self {
            client_secret: client_secret.into(),
            interactive: std::io::stdin().is_terminal(),
        }
    }
}

impl std::fmt::Debug for InstalledFlowLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstalledFlowLogin")
            .field("client_secret", &self.client_secret)
            .field("interactive", &self.interactive)
            .finish()
    }
}

/// Keeps the token pair the authenticator issues so it can go to our own cache.
#[derive(Clone, Default)]
struct CapturingStorage {
    captured: Arc<Mutex<Option<TokenInfo>>>,
}

#[async_trait::async_trait]
impl TokenStorage for CapturingStorage {
    async fn set(&self, _scopes: &[&str], token: TokenInfo) -> anyhow::Result<()> {
        *self.captured.lock().await = Some(token);
        Ok(())
    }

    async fn get(&self, _scopes: &[&str]) -> Option<TokenInfo> {
        self.captured.lock().await.clone()
    }
}

fn credential_from_parts(
    access_token: Option<String>,
    refresh_token: Option<String>,
    expires_at_unix: Option<i64>,
) -> Option<Credential> {
    Some(Credential {
        access_token: access_token.filter(|token| !token.is_empty())?,
        refresh_token,
        expires_at: expires_at_unix.and_then(|seconds| DateTime::<Utc>::from_timestamp(seconds, 0)),
    })
}

#[async_trait::async_trait]
impl CredentialSource for InstalledFlowLogin {
    fn name(&self) -> &'static str {
        "interactive login"
    }

    #[instrument(name = "InstalledFlowLogin::acquire", skip(_cached))]
    async fn acquire(
        &self,
        _cached: Option<&Credential>,
    ) -> error_stack::Result<Credential, AuthError> {
        if !self.interactive {
            return Err(report!(AuthError::NoInteractiveContext))
                .attach_printable("Standard input is not a terminal, cannot complete the browser login");
        }

        let secret = read_client_secret(&self.client_secret).await?;
        let storage = CapturingStorage::default();

        let auth = oauth2::InstalledFlowAuthenticator::builder(
            secret,
            InstalledFlowReturnMethod::HTTPRedirect,
        )
        .with_storage(Box::new(storage.clone()))
        .build()
        .await
        .change_context(AuthError::InteractiveLoginFailed)
        .attach_printable("Could not create an authenticator")?;

        let access_token = auth
            .token(SCOPES)
            .await
            .change_context(AuthError::InteractiveLoginFailed)?;

        let captured = storage.captured.lock().await.take();
        let credential = match captured {
            Some(info) => credential_from_parts(
                info.access_token,
                info.refresh_token,
                info.expires_at.map(|at| at.unix_timestamp()),
            ),
            None => credential_from_parts(
                access_token.token().map(str::to_owned),
                None,
                access_token.expiration_time().map(|at| at.unix_timestamp()),
            ),
        };

        credential
            .ok_or_else(|| report!(AuthError::InteractiveLoginFailed))
            .attach_printable("Authorization server issued no access token")
    }
}
