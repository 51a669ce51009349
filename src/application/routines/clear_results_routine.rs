use std::sync::Arc;

use error_stack::ResultExt;
use tracing::instrument;

use crate::application::sheet_writer::SheetWriter;
use crate::domain::sheets::ranges;
use crate::ports::{
    routine::{Routine, RoutineError},
    spreadsheet::SpreadsheetWrite,
};

/// Empties the results range without touching the input or the other sheets.
pub struct ClearResultsRoutine<S: ?Sized> {
    spreadsheet: Arc<S>,
}

impl<S: SpreadsheetWrite + ?Sized> ClearResultsRoutine<S> {
    pub fn new(spreadsheet: Arc<S>) -> Self {
        Self { spreadsheet }
    }
}

#[async_trait::async_trait]
impl<S: SpreadsheetWrite + ?Sized> Routine for ClearResultsRoutine<S> {
    fn name(&self) -> &'static str {
        "ClearResultsRoutine"
    }

    #[instrument(skip(self), name = "ClearResultsRoutine::run")]
    async fn run(&self) -> error_stack::Result<(), RoutineError> {
        tracing::info!("Clear: 🧹 Clearing {}", ranges::vip_results::RW_CLEAR);

        SheetWriter::new(self.spreadsheet.as_ref())
            .clear(ranges::vip_results::RW_CLEAR)
            .await
            .change_context(RoutineError::routine_failure(
                "Failed to clear the results range",
            ))?;

        Ok(())
    }
}
