use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

/// Display pattern used both for the rewritten CSV dates and the dashboard labels.
pub const DISPLAY_DATE_FORMAT: &str = "%m/%d/%Y";

pub const DATE_RANGE_NOT_FOUND: &str = "Date range not found";

// Exports sometimes render the date column as a float (`20241209.0`).
static COMPACT_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})(\d{2})(\d{2})(?:\.0+)?$").expect("compact date pattern is valid")
});

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateFormatError {
    #[error("'{0}' does not match the YYYYMMDD pattern")]
    PatternMismatch(String),
    #[error("'{0}' is not a calendar date")]
    InvalidCalendarDate(String),
}

/// Parses a `YYYYMMDD` date.
pub fn parse_compact_date(raw: &str) -> Result<NaiveDate, DateFormatError> {
    let raw = raw.trim();
    let captures = COMPACT_DATE
        .captures(raw)
        .ok_or_else(|| DateFormatError::PatternMismatch(raw.to_owned()))?;

    let field = |i: usize| captures[i].parse::<u32>();
    match (field(1), field(2), field(3)) {
        (Ok(year), Ok(month), Ok(day)) => i32::try_from(year)
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, month, day))
            .ok_or_else(|| DateFormatError::InvalidCalendarDate(raw.to_owned())),
        _ => Err(DateFormatError::PatternMismatch(raw.to_owned())),
    }
}

/// Rewrites `YYYYMMDD` as `MM/DD/YYYY`.
pub fn reformat_compact_date(raw: &str) -> Result<String, DateFormatError> {
    parse_compact_date(raw).map(|date| date.format(DISPLAY_DATE_FORMAT).to_string())
}

pub fn parse_display_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DISPLAY_DATE_FORMAT).ok()
}

/// Earliest and latest date of a reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn from_dates<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Option<Self> {
        dates.into_iter().fold(None, |span, date| match span {
            None => Some(DateSpan {
                start: date,
                end: date,
            }),
            Some(DateSpan { start, end }) => Some(DateSpan {
                start: start.min(date),
                end: end.max(date),
            }),
        })
    }

    /// Builds the span from dashboard label cells, skipping blanks and unparsable text.
    pub fn from_labels<'a, I: IntoIterator<Item = &'a str>>(labels: I) -> Option<Self> {
        Self::from_dates(
            labels
                .into_iter()
                .filter(|label| !label.trim().is_empty())
                .filter_map(parse_display_date),
        )
    }

    pub fn label(span: Option<Self>) -> String {
        span.map(|span| span.to_string())
            .unwrap_or_else(|| DATE_RANGE_NOT_FOUND.to_owned())
    }
}

impl std::fmt::Display for DateSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format(DISPLAY_DATE_FORMAT),
            self.end.format(DISPLAY_DATE_FORMAT)
        )
    }
}
