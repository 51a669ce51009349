use std::path::Path;

use thiserror::Error;

use crate::domain::table::Table;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("Input file could not be read")]
    Unreadable,
    #[error("Input file has a malformed record")]
    MalformedRecord,
    #[error("Date column '{0}' is missing from the header")]
    MissingDateColumn(String),
    #[error("Date column holds a value that is not YYYYMMDD")]
    InvalidDate,
}

/// Produces the table that gets written to the results sheet.
pub trait TableSource: Send + Sync {
    fn load_table(&self, path: &Path) -> error_stack::Result<Table, DataError>;
}
