use std::fmt::Formatter;

use super::cell_position::CellPosition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A1Notation(pub String);

impl std::fmt::Display for A1Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<A1Notation> for String {
    fn from(a1_notation: A1Notation) -> Self {
        a1_notation.0
    }
}

impl From<&str> for A1Notation {
    fn from(s: &str) -> Self {
        A1Notation(s.to_owned())
    }
}

impl AsRef<str> for A1Notation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub trait ToA1Notation {
    fn to_a1_notation(&self, sheet_name: Option<&str>) -> A1Notation;
}

/// Prefixes a local reference with a quoted sheet title, e.g. `'Red List'!A4`.
pub fn with_sheet_prefix(sheet_name: Option<&str>, local: &str) -> A1Notation {
    match sheet_name {
        Some(sheet_name) => A1Notation(format!(
            "'{}'!{}",
            sheet_name.trim_matches('\'').replace('\'', "''"),
            local
        )),
        None => A1Notation(local.to_owned()),
    }
}

impl ToA1Notation for CellPosition {
    fn to_a1_notation(&self, sheet_name: Option<&str>) -> A1Notation {
        with_sheet_prefix(sheet_name, &format!("{}{}", self.col, self.row))
    }
}
