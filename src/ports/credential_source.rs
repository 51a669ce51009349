use thiserror::Error;

use crate::domain::credential::Credential;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Token cache is corrupt")]
    CorruptTokenCache,
    #[error("Token cache could not be read or written")]
    TokenCacheUnavailable,
    #[error("Client secret could not be loaded")]
    ClientSecretUnavailable,
    #[error("Cached credential has no refresh token")]
    MissingRefreshToken,
    #[error("Token refresh failed")]
    RefreshFailed,
    #[error("Interactive login requires a terminal")]
    NoInteractiveContext,
    #[error("Interactive login failed")]
    InteractiveLoginFailed,
}

/// A way of producing a fresh credential.
#[async_trait::async_trait]
pub trait CredentialSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// `cached` is the credential currently in the token cache, if any.
    async fn acquire(
        &self,
        cached: Option<&Credential>,
    ) -> error_stack::Result<Credential, AuthError>;
}
