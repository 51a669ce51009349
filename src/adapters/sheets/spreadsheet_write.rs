use error_stack::ResultExt;
use google_sheets4::api::{BatchUpdateSpreadsheetRequest, ClearValuesRequest, ValueRange};
use tracing::instrument;

use crate::domain::{sheets::number_format::ColumnFormatPatch, table::CellValue};
use crate::ports::spreadsheet::{RemoteError, SpreadsheetWrite, WriteSummary};

use super::{
    batch_request_factory::BatchRequestFactory, spreadsheet_manager::SpreadsheetManager,
    value_range_factory::ValueRangeFactory,
};

#[async_trait::async_trait]
impl SpreadsheetWrite for SpreadsheetManager {
    #[instrument]
    async fn clear_range(&self, range: &str) -> error_stack::Result<(), RemoteError> {
        self.hub
            .spreadsheets()
            .values_clear(ClearValuesRequest::default(), &self.spreadsheet_id, range)
            .doit()
            .await
            .map(|_| ())
            .change_context(RemoteError::FailedToClearRange)
            .attach_printable_lazy(|| format!("Failed to clear range {range}"))
    }

    #[instrument(skip(rows), fields(rows = rows.len()))]
    async fn write_rows(
        &self,
        range: &str,
        rows: &[Vec<CellValue>],
    ) -> error_stack::Result<WriteSummary, RemoteError> {
        let response = self
            .hub
            .spreadsheets()
            .values_update(ValueRange::from_rows(rows), &self.spreadsheet_id, range)
            .value_input_option("RAW")
            .doit()
            .await
            .change_context(RemoteError::FailedToWriteRange)
            .attach_printable_lazy(|| format!("Failed to write range {range}"))?;

        let updated_cells = response.1.updated_cells.unwrap_or(0).max(0) as u32;
        Ok(WriteSummary { updated_cells })
    }

    #[instrument]
    async fn apply_column_format(
        &self,
        patch: &ColumnFormatPatch,
    ) -> error_stack::Result<(), RemoteError> {
        self.hub
            .spreadsheets()
            .batch_update(
                BatchUpdateSpreadsheetRequest::from_column_format(patch),
                &self.spreadsheet_id,
            )
            .doit()
            .await
            .map(|_| ())
            .change_context(RemoteError::FailedToFormatCells)
            .attach_printable_lazy(|| {
                format!(
                    "Failed to format column {} of sheet {}",
                    patch.column, patch.sheet_id
                )
            })
    }
}
