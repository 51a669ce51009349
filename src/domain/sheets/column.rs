use std::{fmt::Formatter, str::FromStr};

use thiserror::Error;

/// Zero-based spreadsheet column. `A` is index 0.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Column {
    index: u32,
}

impl Column {
    pub const fn from_index(index: u32) -> Self {
        Column { index }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    /// Number of columns from `A` up to and including this one.
    pub fn width(&self) -> usize {
        self.index as usize + 1
    }

    pub fn letters(&self) -> String {
        index_to_letters(self.index)
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letters())
    }
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Column(index: {}, letters: {})", self.index, self)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColumnParseError {
    #[error("Empty column reference")]
    Empty,
    #[error("Non-alphabetic character in column")]
    NonAlphabeticCharacter,
    #[error("Column reference is too large")]
    Overflow,
}

impl FromStr for Column {
    type Err = ColumnParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_col(s)
    }
}

pub fn parse_col<T: AsRef<str>>(col_str: T) -> Result<Column, ColumnParseError> {
    let col_str = col_str.as_ref();
    if col_str.is_empty() {
        return Err(ColumnParseError::Empty);
    }
    if col_str.chars().any(|c| !c.is_ascii_alphabetic()) {
        return Err(ColumnParseError::NonAlphabeticCharacter);
    }

    let number = col_str
        .chars()
        .map(|c| c.to_ascii_uppercase() as u32 - 'A' as u32 + 1)
        .try_fold(0u32, |acc, digit| acc.checked_mul(26)?.checked_add(digit))
        .ok_or(ColumnParseError::Overflow)?;

    Ok(Column::from_index(number - 1))
}

fn index_to_letters(index: u32) -> String {
    let mut number = u64::from(index) + 1;
    let mut result = Vec::new();
    while number > 0 {
        let remainder = (number - 1) % 26;
        result.push((remainder as u8 + b'A') as char);
        number = (number - remainder - 1) / 26;
    }
    result.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_display_single_letter() {
        assert_eq!(Column::from_index(0).to_string(), "A");
        assert_eq!(Column::from_index(4).to_string(), "E");
        assert_eq!(Column::from_index(25).to_string(), "Z");
    }

    #[test]
    fn test_column_display_two_letters() {
        assert_eq!(Column::from_index(26).to_string(), "AA");
        assert_eq!(Column::from_index(51).to_string(), "AZ");
        assert_eq!(Column::from_index(52).to_string(), "BA");
        assert_eq!(Column::from_index(78).to_string(), "CA");
    }

    #[test]
    fn test_parse_col_valid() {
        assert_eq!(parse_col("A").unwrap(), Column::from_index(0));
        assert_eq!(parse_col("e").unwrap(), Column::from_index(4));
        assert_eq!(parse_col("AA").unwrap(), Column::from_index(26));
        assert_eq!(parse_col("ca").unwrap(), Column::from_index(78));
        assert_eq!(parse_col("ZZ").unwrap(), Column::from_index(26 * 26 + 25));
    }

    #[test]
    fn test_parse_col_invalid() {
        assert_eq!(parse_col(""), Err(ColumnParseError::Empty));
        assert_eq!(parse_col("A1"), Err(ColumnParseError::NonAlphabeticCharacter));
        assert_eq!(parse_col("$"), Err(ColumnParseError::NonAlphabeticCharacter));
        assert_eq!(parse_col("ZZZZZZZZ"), Err(ColumnParseError::Overflow));
    }

    #[test]
    fn test_ca_is_seventy_ninth_column() {
        let col: Column = "CA".parse().unwrap();
        assert_eq!(col.width(), 79);
    }

    #[test]
    fn test_letters_round_trip() {
        for index in [0, 25, 26, 78, 701, 702, 16383] {
            let col = Column::from_index(index);
            assert_eq!(parse_col(col.letters()).unwrap(), col);
        }
    }

    #[test]
    fn test_column_debug() {
        assert_eq!(
            format!("{:?}", Column::from_index(4)),
            "Column(index: 4, letters: E)"
        );
    }
}
