use super::{
    a1_notation::{with_sheet_prefix, A1Notation, ToA1Notation},
    cell_position::CellPosition,
    column::Column,
    row::Row,
};

/// Closed rectangular range, optionally bound to a sheet title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRange {
    pub start: CellPosition,
    pub end: CellPosition,
    pub sheet_title: Option<String>,
}

impl CellRange {
    /// Range spanning `row_count` rows from `first_row`, between two columns.
    /// `row_count` of zero is treated as a single row.
    pub fn rows(
        sheet_title: Option<&str>,
        first_col: Column,
        last_col: Column,
        first_row: Row,
        row_count: u32,
    ) -> Self {
        let last_row = first_row + row_count.saturating_sub(1);
        Self {
            start: CellPosition::new(first_col, first_row),
            end: CellPosition::new(last_col, last_row),
            sheet_title: sheet_title.map(str::to_owned),
        }
    }
}

impl ToA1Notation for CellRange {
    fn to_a1_notation(&self, sheet_name: Option<&str>) -> A1Notation {
        let sheet_name = sheet_name.or(self.sheet_title.as_deref());
        let local = format!(
            "{}{}:{}{}",
            self.start.col, self.start.row, self.end.col, self.end.row
        );
        with_sheet_prefix(sheet_name, &local)
    }
}
