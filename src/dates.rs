//! Calendar date helpers: lenient parsing, zero-padded rendering and
//! inclusive day ranges.

use chrono::{DateTime, Datelike, NaiveDate};

use crate::error::{GameError, GameResult};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%Y%m%d", "%B %d, %Y"];

/// Parse a user-supplied date. Accepts the common numeric layouts, long
/// month names ("April 5, 2015") and RFC 3339 timestamps.
pub fn parse_date(input: &str) -> GameResult<NaiveDate> {
    let trimmed = input.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.date_naive());
    }
    Err(GameError::DateParse(input.to_string()))
}

/// Zero-padded (year, month, day) strings, e.g. ("2015", "04", "05").
pub fn ymd(date: NaiveDate) -> (String, String, String) {
    (
        date.year().to_string(),
        format!("{:02}", date.month()),
        format!("{:02}", date.day()),
    )
}

/// `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    let (year, month, day) = ymd(date);
    format!("{year}-{month}-{day}")
}

/// Every date from `start` to `end`, both inclusive. Empty when `start > end`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}
