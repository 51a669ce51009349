use error_stack::ResultExt;
use tracing::instrument;

use crate::ports::spreadsheet::{RemoteError, SpreadsheetRead};

use super::{spreadsheet_manager::SpreadsheetManager, string_grid::IntoStringGrid};

#[async_trait::async_trait]
impl SpreadsheetRead for SpreadsheetManager {
    #[instrument]
    async fn read_range(&self, range: &str) -> error_stack::Result<Vec<Vec<String>>, RemoteError> {
        let response = self
            .hub
            .spreadsheets()
            .values_get(&self.spreadsheet_id, range)
            .doit()
            .await
            .change_context(RemoteError::FailedToReadRange)
            .attach_printable_lazy(|| format!("Failed to fetch values for range {range}"))?;

        // An empty range comes back without `values`.
        Ok(response.1.values.unwrap_or_default().into_string_grid())
    }
}
