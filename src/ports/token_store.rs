use crate::domain::credential::Credential;

use super::credential_source::AuthError;

#[async_trait::async_trait]
pub trait TokenStore: Send + Sync {
    /// Returns `None` when nothing has been persisted yet.
    async fn load(&self) -> error_stack::Result<Option<Credential>, AuthError>;

    async fn save(&self, credential: &Credential) -> error_stack::Result<(), AuthError>;
}
