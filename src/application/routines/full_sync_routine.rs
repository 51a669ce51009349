use std::{path::PathBuf, sync::Arc};

use error_stack::ResultExt;
use tracing::instrument;

use crate::application::{red_list_deriver::RedListDeriver, sheet_writer::SheetWriter};
use crate::domain::sheets::ranges;
use crate::ports::{
    routine::{Routine, RoutineError},
    spreadsheet::{SpreadsheetRead, SpreadsheetWrite},
    table_source::TableSource,
};

/// Rewrites the results sheet from the CSV export, then appends the red list.
pub struct FullSyncRoutine<S: ?Sized> {
    spreadsheet: Arc<S>,
    table_source: Arc<dyn TableSource>,
    csv_path: PathBuf,
}

impl<S: SpreadsheetRead + SpreadsheetWrite + ?Sized> FullSyncRoutine<S> {
    pub fn new(spreadsheet: Arc<S>, table_source: Arc<dyn TableSource>, csv_path: PathBuf) -> Self {
        Self {
            spreadsheet,
            table_source,
            csv_path,
        }
    }
}

#[async_trait::async_trait]
impl<S: SpreadsheetRead + SpreadsheetWrite + ?Sized> Routine for FullSyncRoutine<S> {
    fn name(&self) -> &'static str {
        "FullSyncRoutine"
    }

    #[instrument(skip(self), name = "FullSyncRoutine::run")]
    async fn run(&self) -> error_stack::Result<(), RoutineError> {
        tracing::info!("Full run: 📄 Transforming {}", self.csv_path.display());
        // Loaded before clearing so a bad export never empties the sheet.
        let table = self
            .table_source
            .load_table(&self.csv_path)
            .change_context(RoutineError::routine_failure(
                "Failed to transform the CSV export",
            ))?;

        let writer = SheetWriter::new(self.spreadsheet.as_ref());

        tracing::info!("Full run: 🧹 Clearing previous results");
        writer
            .clear(ranges::vip_results::RW_CLEAR)
            .await
            .change_context(RoutineError::routine_failure(
                "Failed to clear the results range",
            ))?;

        tracing::info!("Full run: 📝 Writing {} rows", table.row_count());
        writer
            .write(ranges::vip_results::RW_DATA, &table)
            .await
            .change_context(RoutineError::routine_failure(
                "Failed to write results, the range was left cleared",
            ))?;

        if let Err(report) = writer
            .format_column_as_time(
                ranges::vip_results::FORMAT_SHEET_ID,
                ranges::vip_results::TIME_COLUMN,
                ranges::vip_results::FIRST_DATA_ROW,
            )
            .await
        {
            tracing::warn!("Full run: time format was not applied: {report:?}");
        }

        tracing::info!("Full run: 🚩 Updating Red List");
        RedListDeriver::new(self.spreadsheet.as_ref())
            .derive_and_append()
            .await
            .change_context(RoutineError::routine_failure("Failed to update Red List"))?;

        Ok(())
    }
}
