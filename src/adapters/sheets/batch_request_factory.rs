use google_sheets4::{
    api::{
        BatchUpdateSpreadsheetRequest, CellData, CellFormat, GridRange, NumberFormat,
        RepeatCellRequest, Request,
    },
    FieldMask,
};

use crate::domain::sheets::number_format::ColumnFormatPatch;

const NUMBER_FORMAT_FIELD: &str = "userEnteredFormat.numberFormat";

pub trait BatchRequestFactory {
    fn from_column_format(patch: &ColumnFormatPatch) -> Self;
}

impl BatchRequestFactory for BatchUpdateSpreadsheetRequest {
    /// One `repeatCell` request. The grid range has no end row, so it runs to the bottom of the
    /// sheet.
    fn from_column_format(patch: &ColumnFormatPatch) -> Self {
        let repeat_cell = RepeatCellRequest {
            range: Some(GridRange {
                sheet_id: Some(patch.sheet_id),
                start_column_index: Some(patch.start_column_index() as i32),
                end_column_index: Some(patch.end_column_index() as i32),
                start_row_index: Some(patch.start_row.index() as i32),
                end_row_index: None,
            }),
            cell: Some(CellData {
                user_entered_format: Some(CellFormat {
                    number_format: Some(NumberFormat {
                        type_: Some(patch.format_type.to_string()),
                        pattern: Some(patch.pattern.to_string()),
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            fields: Some(FieldMask::new(&[NUMBER_FORMAT_FIELD])),
        };

        Self {
            requests: Some(vec![Request {
                repeat_cell: Some(repeat_cell),
                ..Default::default()
            }]),
            ..Default::default()
        }
    }
}
