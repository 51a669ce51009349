use google_sheets4::api::ValueRange;

use crate::domain::table::CellValue;

pub trait ValueRangeFactory {
    fn from_rows(rows: &[Vec<CellValue>]) -> Self;
}

impl ValueRangeFactory for ValueRange {
    fn from_rows(rows: &[Vec<CellValue>]) -> Self {
        let values = rows
            .iter()
            .map(|row| row.iter().map(CellValue::to_json).collect())
            .collect();

        Self {
            major_dimension: Some("ROWS".to_string()),
            range: None,
            values: Some(values),
        }
    }
}
