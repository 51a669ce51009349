use std::path::PathBuf;

use crate::application::csv_transformer::DEFAULT_DATE_COLUMN;

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct InputConfig {
    pub csv_path: PathBuf,
    /// Header of the `YYYYMMDD` column.
    #[serde(default = "default_date_column")]
    pub date_column: String,
}

fn default_date_column() -> String {
    DEFAULT_DATE_COLUMN.to_owned()
}
