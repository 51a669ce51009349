use config::{Config, Environment, File};
use error_stack::{report, ResultExt};
use thiserror::Error;
use tracing::instrument;

use super::{input_config::InputConfig, sheets_config::SpreadsheetConfig};

pub const DEFAULT_CONFIG_PATH: &str = "Config";
pub const ENV_PREFIX: &str = "VIP_SYNC";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}'")]
    Unreadable(String),
    #[error("Invalid or missing config field at '{path}'")]
    InvalidField { path: String },
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub sheets: SpreadsheetConfig,
    pub input: InputConfig,
}

impl AppConfig {
    /// Loads the file named by `CONFIG_PATH` (default `Config`), overridden by `VIP_SYNC__*`
    /// environment variables.
    pub fn load() -> error_stack::Result<Self, ConfigError> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&config_path)
    }

    #[instrument(name = "AppConfig::load_from")]
    pub fn load_from(config_path: &str) -> error_stack::Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(config_path))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .change_context_lazy(|| ConfigError::Unreadable(config_path.to_owned()))?;

        let value = config
            .try_deserialize::<serde_json::Value>()
            .change_context_lazy(|| ConfigError::Unreadable(config_path.to_owned()))?;

        Self::from_value(value)
            .attach_printable_lazy(|| format!("Config file: '{config_path}'"))
            .attach_printable("Make sure all required fields are present in the configuration file")
    }

    fn from_value(value: serde_json::Value) -> error_stack::Result<Self, ConfigError> {
        serde_path_to_error::deserialize(value).map_err(|err| {
            let path = err.path().to_string();
            report!(ConfigError::InvalidField { path }).attach_printable(err.into_inner().to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use super::*;

    fn write_config(dir: &tempfile::TempDir, contents: &str) -> String {
        fs::write(dir.path().join("Config.toml"), contents).unwrap();
        dir.path().join("Config").to_string_lossy().into_owned()
    }

    #[test]
    fn test_load_applies_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
            [sheets]
            spreadsheet_id = "abc123"

            [input]
            csv_path = "csv/results.csv"
            "#,
        );

        let config = AppConfig::load_from(&path).unwrap();

        assert_eq!(&*config.sheets.spreadsheet_id, "abc123");
        assert_eq!(config.sheets.client_secret, PathBuf::from("client_secret.json"));
        assert_eq!(config.sheets.token_cache, PathBuf::from("token.json"));
        assert_eq!(config.input.csv_path, PathBuf::from("csv/results.csv"));
        assert_eq!(config.input.date_column, "Completed");
    }

    #[test]
    fn test_load_reads_overrides_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
            [sheets]
            spreadsheet_id = "abc123"
            client_secret = "secrets/desktop.json"
            token_cache = "cache/token.json"

            [input]
            csv_path = "export.csv"
            date_column = "Finished"
            "#,
        );

        let config = AppConfig::load_from(&path).unwrap();

        assert_eq!(config.sheets.client_secret, PathBuf::from("secrets/desktop.json"));
        assert_eq!(config.sheets.token_cache, PathBuf::from("cache/token.json"));
        assert_eq!(config.input.date_column, "Finished");
    }

    #[test]
    fn test_missing_field_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
            [sheets]
            client_secret = "client_secret.json"

            [input]
            csv_path = "export.csv"
            "#,
        );

        let report = AppConfig::load_from(&path).unwrap_err();

        assert_eq!(
            report.current_context(),
            &ConfigError::InvalidField {
                path: "sheets".to_owned()
            }
        );
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Missing").to_string_lossy().into_owned();

        let report = AppConfig::load_from(&path).unwrap_err();

        assert_eq!(report.current_context(), &ConfigError::Unreadable(path));
    }
}
