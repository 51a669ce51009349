use std::path::PathBuf;

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct SpreadsheetConfig {
    pub spreadsheet_id: Box<str>,
    /// Installed-application client secret, needed for login and refresh.
    #[serde(default = "default_client_secret")]
    pub client_secret: PathBuf,
    #[serde(default = "default_token_cache")]
    pub token_cache: PathBuf,
}

fn default_client_secret() -> PathBuf {
    PathBuf::from("client_secret.json")
}

fn default_token_cache() -> PathBuf {
    PathBuf::from("token.json")
}
