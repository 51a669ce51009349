// Ranges are hardcoded to match the layout of the VIP tracking spreadsheet

use super::{column::Column, row::Row};

pub mod vip_results {
    use super::*;

    pub const RW_CLEAR: &str = "VIP Results!A6:CA10000";
    pub const RW_DATA: &str = "VIP Results!A6:CA";

    pub const FIRST_DATA_ROW: Row = Row::from_row(6);
    /// Column `CA`. The CSV window and both ranges above stop here.
    pub const LAST_COLUMN: Column = Column::from_index(78);

    /// "Time" field of the export.
    pub const TIME_COLUMN: Column = Column::from_index(4);
    /// Assumes the results tab is the first sheet of the spreadsheet.
    pub const FORMAT_SHEET_ID: i32 = 0;
}

pub mod dashboard {
    pub const RO_DATE_LABELS: &str = "RYG Dashboard!B7:B11";
    pub const RO_ACTIVITY: &str = "RYG Dashboard!C6:J1000";
}

pub mod red_list {
    use super::*;

    pub const SHEET_TITLE: &str = "Red List";
    pub const RO_EXTENT: &str = "Red List!A:E";

    pub const FIRST_COLUMN: Column = Column::from_index(0);
    pub const LAST_COLUMN: Column = Column::from_index(4);
}
