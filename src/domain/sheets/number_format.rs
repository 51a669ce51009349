use super::{column::Column, row::Row};

pub const TIME_OF_DAY_PATTERN: &str = "h:mm am/pm";

/// Number format applied to a single column, from `start_row` to the bottom of the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFormatPatch {
    pub sheet_id: i32,
    pub column: Column,
    pub start_row: Row,
    pub format_type: &'static str,
    pub pattern: &'static str,
}

impl ColumnFormatPatch {
    pub fn time_of_day(sheet_id: i32, column: Column, start_row: Row) -> Self {
        Self {
            sheet_id,
            column,
            start_row,
            format_type: "TIME",
            pattern: TIME_OF_DAY_PATTERN,
        }
    }

    pub fn start_column_index(&self) -> u32 {
        self.column.index()
    }

    /// Exclusive, as the Sheets grid range expects.
    pub fn end_column_index(&self) -> u32 {
        self.column.index() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_patch_covers_one_column() {
        let patch = ColumnFormatPatch::time_of_day(0, Column::from_index(4), Row::from_row(6));
        assert_eq!(patch.start_column_index(), 4);
        assert_eq!(patch.end_column_index(), 5);
        assert_eq!(patch.start_row.index(), 5);
        assert_eq!(patch.format_type, "TIME");
        assert_eq!(patch.pattern, "h:mm am/pm");
    }
}
