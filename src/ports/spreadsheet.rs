use thiserror::Error;

use crate::domain::{sheets::number_format::ColumnFormatPatch, table::CellValue};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    #[error("Failed to read range")]
    FailedToReadRange,
    #[error("Failed to clear range")]
    FailedToClearRange,
    #[error("Failed to write range")]
    FailedToWriteRange,
    #[error("Failed to apply cell format")]
    FailedToFormatCells,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub updated_cells: u32,
}

#[async_trait::async_trait]
pub trait SpreadsheetRead: Send + Sync {
    /// Reads the formatted values of `range`, row by row. Trailing empty cells and rows are
    /// omitted by the service, so rows may be ragged and the grid may be empty.
    async fn read_range(&self, range: &str)
        -> error_stack::Result<Vec<Vec<String>>, RemoteError>;
}

#[async_trait::async_trait]
pub trait SpreadsheetWrite: Send + Sync {
    async fn clear_range(&self, range: &str) -> error_stack::Result<(), RemoteError>;

    /// Writes `rows` as-is (no formula or date parsing) starting at the top-left of `range`.
    async fn write_rows(
        &self,
        range: &str,
        rows: &[Vec<CellValue>],
    ) -> error_stack::Result<WriteSummary, RemoteError>;

    async fn apply_column_format(
        &self,
        patch: &ColumnFormatPatch,
    ) -> error_stack::Result<(), RemoteError>;
}
