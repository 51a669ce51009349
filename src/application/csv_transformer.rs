use std::{fs::File, io::Read, path::Path};

use error_stack::{report, ResultExt};
use tracing::instrument;

use crate::domain::{
    dates::reformat_compact_date,
    sheets::ranges,
    table::{is_missing, CellValue, Table},
};
use crate::ports::table_source::{DataError, TableSource};

/// The exporter puts two metadata rows between the header and the results.
pub const SKIPPED_DATA_ROWS: usize = 2;

pub const DEFAULT_DATE_COLUMN: &str = "Completed";

/// Turns the VIP results export into the table written to the results sheet.
#[derive(Debug, Clone)]
pub struct CsvTransformer {
    date_column: String,
}

impl Default for CsvTransformer {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_COLUMN)
    }
}

impl CsvTransformer {
    pub fn new<S: Into<String>>(date_column: S) -> Self {
        Self {
            date_column: date_column.into(),
        }
    }

    /// Columns kept from the export, `A` through `CA`.
    pub fn window_width() -> usize {
        ranges::vip_results::LAST_COLUMN.width()
    }

    #[instrument(skip(self))]
    pub fn transform(&self, path: &Path) -> error_stack::Result<Table, DataError> {
        let file = File::open(path)
            .change_context(DataError::Unreadable)
            .attach_printable_lazy(|| format!("Could not open {}", path.display()))?;
        let table = self.transform_reader(file)?;
        tracing::info!(
            rows = table.row_count(),
            columns = table.column_count(),
            "Transformed {}",
            path.display()
        );
        Ok(table)
    }

    pub fn transform_reader<R: Read>(&self, reader: R) -> error_stack::Result<Table, DataError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .change_context(DataError::MalformedRecord)
            .attach_printable("Could not read the header row")?
            .clone();

        let date_index = headers
            .iter()
            .position(|header| header.trim() == self.date_column)
            .ok_or_else(|| report!(DataError::MissingDateColumn(self.date_column.clone())))?;
        let width = headers.len();

        let mut rows = Vec::new();
        for (line, record) in reader.records().enumerate() {
            let record = record
                .change_context(DataError::MalformedRecord)
                .attach_printable_lazy(|| format!("Data row {}", line + 1))?;

            let row = (0..width)
                .map(|i| {
                    let raw = record.get(i).unwrap_or("");
                    if i == date_index {
                        date_cell(raw)
                    } else {
                        Ok(CellValue::infer(raw))
                    }
                })
                .collect::<error_stack::Result<Vec<_>, _>>()
                .attach_printable_lazy(|| format!("Data row {}", line + 1))?;
            rows.push(row);
        }

        Ok(Table::new(rows).window(SKIPPED_DATA_ROWS, Self::window_width()))
    }
}

fn date_cell(raw: &str) -> error_stack::Result<CellValue, DataError> {
    if raw.trim().is_empty() || is_missing(raw) {
        return Ok(CellValue::Null);
    }
    reformat_compact_date(raw)
        .map(CellValue::Text)
        .change_context(DataError::InvalidDate)
}

impl TableSource for CsvTransformer {
    fn load_table(&self, path: &Path) -> error_stack::Result<Table, DataError> {
        self.transform(path)
    }
}
