//! Date module - labelled calendar dates extracted from a contract

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Exact calendar format accepted for extracted dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A labelled contract date
///
/// `date` is always a real calendar date written as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateItem {
    /// Free-form label, e.g. "Effective Date"
    #[serde(rename = "type")]
    pub kind: String,

    /// Date in `YYYY-MM-DD` form
    pub date: String,
}

impl DateItem {
    /// Build a date item, returning `None` unless `date` is a strict calendar date
    pub fn new(kind: impl Into<String>, date: &str) -> Option<Self> {
        if !is_calendar_date(date) {
            return None;
        }

        Some(Self {
            kind: kind.into(),
            date: date.to_string(),
        })
    }
}

/// Check that `s` is exactly `YYYY-MM-DD` and names a real calendar day
///
/// chrono alone accepts unpadded fields and signed years, so the shape is
/// checked byte by byte first.
pub fn is_calendar_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    let digits_ok = bytes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 4 && *i != 7)
        .all(|(_, b)| b.is_ascii_digit());
    if !digits_ok {
        return false;
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT).is_ok()
}
