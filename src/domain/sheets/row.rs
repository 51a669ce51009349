use std::fmt::Formatter;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Row {
    index: u32,
}

impl Row {
    pub const fn from_index(index: u32) -> Self {
        Row { index }
    }

    /// Builds a row from its 1-based spreadsheet number. `0` saturates to the first row.
    pub const fn from_row(row: u32) -> Self {
        Row {
            index: row.saturating_sub(1),
        }
    }

    /// Returns the row number as a 1-based index, the way it is shown in A1 notation.
    /// # Examples
    /// ```
    /// use vip_results_sync::domain::sheets::row::Row;
    /// assert_eq!(Row::from_index(0).number(), 1);
    /// assert_eq!(Row::from_index(5).number(), 6);
    /// ```
    pub fn number(&self) -> u32 {
        self.index.saturating_add(1)
    }

    pub fn index(&self) -> u32 {
        self.index
    }
}

impl std::ops::Add<u32> for Row {
    type Output = Row;

    fn add(self, rhs: u32) -> Self::Output {
        Row::from_index(self.index.saturating_add(rhs))
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl std::fmt::Debug for Row {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Row(index: {}, row: {})", self.index, self.number())
    }
}
