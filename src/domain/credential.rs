use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Tokens closer than this to their expiry are treated as expired.
pub const EXPIRY_SKEW_SECONDS: i64 = 60;

/// OAuth access/refresh token pair as persisted in the token cache.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Credential {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => expires_at - Duration::seconds(EXPIRY_SKEW_SECONDS) <= now,
            None => false,
        }
    }

    pub fn can_refresh(&self) -> bool {
        self.refresh_token
            .as_deref()
            .is_some_and(|token| !token.is_empty())
    }

    /// Merges a refresh response into this credential. The refresh token is kept unless the
    /// server issued a new one.
    pub fn refreshed(
        &self,
        access_token: String,
        refresh_token: Option<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            access_token,
            refresh_token: refresh_token.or_else(|| self.refresh_token.clone()),
            expires_at,
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_token", &"<redacted>")
            .field("has_refresh_token", &self.can_refresh())
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// What to do with the cached credential before talking to the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialPlan {
    Reuse,
    Refresh,
    Login,
}

impl CredentialPlan {
    pub fn for_state(cached: Option<&Credential>, now: DateTime<Utc>) -> Self {
        match cached {
            Some(credential) if !credential.is_expired(now) => CredentialPlan::Reuse,
            Some(credential) if credential.can_refresh() => CredentialPlan::Refresh,
            _ => CredentialPlan::Login,
        }
    }
}
