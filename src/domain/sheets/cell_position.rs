use super::{column::Column, row::Row};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPosition {
    pub col: Column,
    pub row: Row,
}

impl CellPosition {
    pub fn new(col: Column, row: Row) -> Self {
        Self { col, row }
    }
}
