use error_stack::ResultExt;
use tracing::instrument;

use crate::domain::{
    dates::DateSpan,
    red_list::{derive_rows, RedListRow},
    sheets::{a1_notation::ToA1Notation, cell_range::CellRange, ranges, row::Row},
    table::CellValue,
};
use crate::ports::spreadsheet::{RemoteError, SpreadsheetRead, SpreadsheetWrite};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedListReport {
    pub appended_count: usize,
    /// First row written, `None` when nothing qualified.
    pub first_row: Option<Row>,
}

/// Appends the reps below the activity thresholds to the `Red List` sheet.
///
/// The report is an append-only log: running twice over the same dashboard appends the same
/// entries twice.
pub struct RedListDeriver<'s, S: ?Sized> {
    spreadsheet: &'s S,
}

impl<'s, S: SpreadsheetRead + SpreadsheetWrite + ?Sized> RedListDeriver<'s, S> {
    pub fn new(spreadsheet: &'s S) -> Self {
        Self { spreadsheet }
    }

    #[instrument(skip(self))]
    pub async fn date_range_label(&self) -> error_stack::Result<String, RemoteError> {
        let cells = self
            .spreadsheet
            .read_range(ranges::dashboard::RO_DATE_LABELS)
            .await
            .attach_printable("Error reading dashboard date labels")?;

        let span = DateSpan::from_labels(
            cells
                .iter()
                .filter_map(|row| row.first())
                .map(String::as_str),
        );
        Ok(DateSpan::label(span))
    }

    #[instrument(skip(self))]
    pub async fn derive_and_append(&self) -> error_stack::Result<RedListReport, RemoteError> {
        let date_range = self.date_range_label().await?;
        tracing::info!("Red List: 📅 Reporting period {date_range}");

        let dashboard = self
            .spreadsheet
            .read_range(ranges::dashboard::RO_ACTIVITY)
            .await
            .attach_printable("Error reading dashboard activity rows")?;

        let entries = derive_rows(&dashboard, &date_range);
        if entries.is_empty() {
            tracing::info!("Red List: No entries found for either list");
            return Ok(RedListReport {
                appended_count: 0,
                first_row: None,
            });
        }
        log_entries(&entries);

        let first_row = self.next_free_row().await?;
        let target = CellRange::rows(
            Some(ranges::red_list::SHEET_TITLE),
            ranges::red_list::FIRST_COLUMN,
            ranges::red_list::LAST_COLUMN,
            first_row,
            entries.len() as u32,
        );

        let appended_count = entries.len();
        let rows = entries
            .into_iter()
            .map(|entry| entry.into_cells().into_iter().map(CellValue::Text).collect())
            .collect::<Vec<Vec<_>>>();

        self.spreadsheet
            .write_rows(target.to_a1_notation(None).as_ref(), &rows)
            .await
            .attach_printable_lazy(|| format!("Error appending to {}", target.to_a1_notation(None)))?;

        tracing::info!(
            "Red List: ✅ Appended {appended_count} entries starting at row {first_row}"
        );

        Ok(RedListReport {
            appended_count,
            first_row: Some(first_row),
        })
    }

    /// Row right below the current extent of the report.
    async fn next_free_row(&self) -> error_stack::Result<Row, RemoteError> {
        let extent = self
            .spreadsheet
            .read_range(ranges::red_list::RO_EXTENT)
            .await
            .attach_printable("Error reading current Red List extent")?
            .len();
        Ok(Row::from_index(extent as u32))
    }
}

fn log_entries(entries: &[RedListRow]) {
    for entry in entries {
        if !entry.visit_identity.is_empty() {
            tracing::info!(
                "Adding to Visit Red List: {} from {}",
                entry.visit_identity,
                entry.visit_region
            );
        }
        if entry.in_commitment_list() {
            tracing::info!(
                "Adding to Commitment Red List: {} from {}",
                entry.commitment_identity,
                entry.commitment_region
            );
        }
    }
}
