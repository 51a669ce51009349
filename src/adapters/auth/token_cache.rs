use std::{io, path::PathBuf};

use error_stack::ResultExt;
use tracing::instrument;

use crate::domain::credential::Credential;
use crate::ports::{credential_source::AuthError, token_store::TokenStore};

/// JSON token cache on disk.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl TokenStore for FileTokenStore {
    #[instrument(name = "FileTokenStore::load")]
    async fn load(&self) -> error_stack::Result<Option<Credential>, AuthError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No token cache at {}", self.path.display());
                return Ok(None);
            }
            Err(err) => {
                return Err(err)
                    .change_context(AuthError::TokenCacheUnavailable)
                    .attach_printable_lazy(|| format!("Token cache: {}", self.path.display()))
            }
        };

        serde_json::from_str(&contents)
            .map(Some)
            .change_context(AuthError::CorruptTokenCache)
            .attach_printable_lazy(|| format!("Token cache: {}", self.path.display()))
    }

    #[instrument(name = "FileTokenStore::save", skip(credential))]
    async fn save(&self, credential: &Credential) -> error_stack::Result<(), AuthError> {
        let json = serde_json::to_string_pretty(credential)
            .change_context(AuthError::TokenCacheUnavailable)?;

        tokio::fs::write(&self.path, json)
            .await
            .change_context(AuthError::TokenCacheUnavailable)
            .attach_printable_lazy(|| format!("Token cache: {}", self.path.display()))?;

        tracing::debug!("Token cache written to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn credential() -> Credential {
        Credential {
            access_token: "ya29.access".into(),
            refresh_token: Some("1//refresh".into()),
            expires_at: Some(Utc.with_ymd_and_hms(2024, 12, 9, 13, 0, 0).unwrap()),
        }
    }

    #[tokio::test]
    async fn test_missing_cache_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token.json"));

        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_saved_credential_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token.json"));

        store.save(&credential()).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(credential()));
    }

    #[tokio::test]
    async fn test_cache_uses_rfc3339_expiry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");

        FileTokenStore::new(&path).save(&credential()).await.unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["access_token"], "ya29.access");
        assert_eq!(json["refresh_token"], "1//refresh");
        assert_eq!(json["expires_at"], "2024-12-09T13:00:00Z");
    }

    #[tokio::test]
    async fn test_cache_without_optional_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        std::fs::write(&path, r#"{"access_token":"ya29.access"}"#).unwrap();

        let loaded = FileTokenStore::new(&path).load().await.unwrap().unwrap();

        assert_eq!(loaded.refresh_token, None);
        assert_eq!(loaded.expires_at, None);
    }

    #[tokio::test]
    async fn test_corrupt_cache_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        std::fs::write(&path, "\u{80}not json").unwrap();

        let report = FileTokenStore::new(&path).load().await.unwrap_err();

        assert_eq!(report.current_context(), &AuthError::CorruptTokenCache);
    }

    #[tokio::test]
    async fn test_unwritable_cache_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("missing-dir").join("token.json"));

        let report = store.save(&credential()).await.unwrap_err();

        assert_eq!(report.current_context(), &AuthError::TokenCacheUnavailable);
    }
}
