use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::instrument;

use crate::domain::credential::{Credential, CredentialPlan};
use crate::ports::{
    credential_source::{AuthError, CredentialSource},
    token_store::TokenStore,
};

/// Hands out a usable credential, preferring the token cache over a new login.
pub struct CredentialProvider {
    store: Arc<dyn TokenStore>,
    cached_token: Arc<dyn CredentialSource>,
    interactive_login: Arc<dyn CredentialSource>,
}

impl std::fmt::Debug for CredentialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialProvider")
            .field("cached_token", &self.cached_token.name())
            .field("interactive_login", &self.interactive_login.name())
            .finish()
    }
}

impl CredentialProvider {
    pub fn new(
        store: Arc<dyn TokenStore>,
        cached_token: Arc<dyn CredentialSource>,
        interactive_login: Arc<dyn CredentialSource>,
    ) -> Self {
        Self {
            store,
            cached_token,
            interactive_login,
        }
    }

    pub async fn obtain(&self) -> error_stack::Result<Credential, AuthError> {
        self.obtain_at(Utc::now()).await
    }

    #[instrument(skip(self))]
    pub async fn obtain_at(
        &self,
        now: DateTime<Utc>,
    ) -> error_stack::Result<Credential, AuthError> {
        let cached = self.store.load().await?;
        let plan = CredentialPlan::for_state(cached.as_ref(), now);
        tracing::debug!(?plan, "Selected credential plan");

        let credential = match (plan, cached) {
            (CredentialPlan::Reuse, Some(credential)) => {
                tracing::info!("Auth: 🔑 Using cached credential");
                return Ok(credential);
            }
            (CredentialPlan::Refresh, cached) => {
                match self.cached_token.acquire(cached.as_ref()).await {
                    Ok(credential) => {
                        tracing::info!("Auth: 🔄 Refreshed expired credential");
                        credential
                    }
                    Err(report) => {
                        tracing::warn!("Auth: refresh failed, falling back to login: {report:?}");
                        self.login(cached.as_ref()).await?
                    }
                }
            }
            (_, cached) => self.login(cached.as_ref()).await?,
        };

        self.store.save(&credential).await?;
        Ok(credential)
    }

    async fn login(
        &self,
        cached: Option<&Credential>,
    ) -> error_stack::Result<Credential, AuthError> {
        tracing::info!(
            "Auth: 🌐 Starting {} for a new credential",
            self.interactive_login.name()
        );
        self.interactive_login.acquire(cached).await
    }
}
