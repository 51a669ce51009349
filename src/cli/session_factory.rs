use std::sync::Arc;

use vip_results_sync::{
    adapters::{
        auth::{
            installed_flow::InstalledFlowLogin, refresh_grant::RefreshTokenSource,
            token_cache::FileTokenStore,
        },
        config::sheets_config::SpreadsheetConfig,
        sheets::spreadsheet_manager::SpreadsheetManager,
    },
    application::credential_provider::CredentialProvider,
    ports::credential_source::AuthError,
};

pub struct SessionFactory;

impl SessionFactory {
    pub fn credential_provider(config: &SpreadsheetConfig) -> CredentialProvider {
        CredentialProvider::new(
            Arc::new(FileTokenStore::new(config.token_cache.clone())),
            Arc::new(RefreshTokenSource::new(config.client_secret.clone())),
            Arc::new(InstalledFlowLogin::new(config.client_secret.clone())),
        )
    }

    /// Obtains a credential and opens the spreadsheet with it.
    pub async fn open(
        config: &SpreadsheetConfig,
    ) -> error_stack::Result<Arc<SpreadsheetManager>, AuthError> {
        let credential = Self::credential_provider(config).obtain().await?;
        Ok(Arc::new(SpreadsheetManager::new(config, &credential)))
    }
}
