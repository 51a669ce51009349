use error_stack::ResultExt;
use tracing::instrument;

use crate::domain::{
    sheets::{column::Column, number_format::ColumnFormatPatch, row::Row},
    table::Table,
};
use crate::ports::spreadsheet::{RemoteError, SpreadsheetWrite, WriteSummary};

/// Writes the transformed export into the results sheet.
///
/// `clear` must run before `write`: the write range is open-ended, so only the clear guarantees
/// that a shorter table leaves no rows of the previous one behind.
pub struct SheetWriter<'s, S: ?Sized> {
    spreadsheet: &'s S,
}

impl<'s, S: SpreadsheetWrite + ?Sized> SheetWriter<'s, S> {
    pub fn new(spreadsheet: &'s S) -> Self {
        Self { spreadsheet }
    }

    #[instrument(skip(self))]
    pub async fn clear(&self, range: &str) -> error_stack::Result<(), RemoteError> {
        self.spreadsheet
            .clear_range(range)
            .await
            .attach_printable_lazy(|| format!("Error clearing data in {range}"))?;
        tracing::info!("Successfully cleared previous data in {range}");
        Ok(())
    }

    #[instrument(skip(self, table), fields(rows = table.row_count()))]
    pub async fn write(
        &self,
        range: &str,
        table: &Table,
    ) -> error_stack::Result<WriteSummary, RemoteError> {
        let summary = self
            .spreadsheet
            .write_rows(range, table.rows())
            .await
            .attach_printable_lazy(|| format!("Error writing {} rows to {range}", table.row_count()))?;
        tracing::info!("Cells updated: {}", summary.updated_cells);
        Ok(summary)
    }

    /// Displays `column` as a time of day from `start_row` down.
    #[instrument(skip(self))]
    pub async fn format_column_as_time(
        &self,
        sheet_id: i32,
        column: Column,
        start_row: Row,
    ) -> error_stack::Result<(), RemoteError> {
        let patch = ColumnFormatPatch::time_of_day(sheet_id, column, start_row);
        // The sheet id is not resolved from the written range's title.
        tracing::debug!(sheet_id, "Applying time format to column {column}");
        self.spreadsheet.apply_column_format(&patch).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::CellValue;
    use crate::ports::fakes::{FakeOp, FakeSpreadsheet, SpreadsheetCall};

    #[tokio::test]
    async fn test_write_reports_updated_cells() {
        let spreadsheet = FakeSpreadsheet::new();
        let table = Table::new(vec![
            vec![CellValue::from("a"), CellValue::Null],
            vec![CellValue::Integer(1), CellValue::Float(2.5)],
        ]);

        let summary = SheetWriter::new(&spreadsheet)
            .write("VIP Results!A6:CA", &table)
            .await
            .unwrap();

        assert_eq!(summary.updated_cells, 4);
        assert_eq!(
            spreadsheet.writes(),
            vec![("VIP Results!A6:CA".to_owned(), table.rows().to_vec())]
        );
    }

    #[tokio::test]
    async fn test_clear_failure_is_remote_error() {
        let spreadsheet = FakeSpreadsheet::new().failing(FakeOp::Clear);

        let report = SheetWriter::new(&spreadsheet)
            .clear("VIP Results!A6:CA10000")
            .await
            .unwrap_err();

        assert_eq!(report.current_context(), &RemoteError::FailedToClearRange);
    }

    #[tokio::test]
    async fn test_format_column_as_time_sends_single_patch() {
        let spreadsheet = FakeSpreadsheet::new();

        SheetWriter::new(&spreadsheet)
            .format_column_as_time(0, Column::from_index(4), Row::from_row(6))
            .await
            .unwrap();

        assert_eq!(
            spreadsheet.calls(),
            vec![SpreadsheetCall::Format(ColumnFormatPatch::time_of_day(
                0,
                Column::from_index(4),
                Row::from_index(5)
            ))]
        );
    }
}
