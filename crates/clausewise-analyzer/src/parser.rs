//! Parse LLM output into summaries, risks and dates
//!
//! Model output is never guaranteed to follow the requested format, so the
//! list parsers work line by line and drop any line they cannot read.
//! Dropped lines are not errors.

use clausewise_domain::{DateItem, RiskItem, Severity};
use tracing::trace;

/// Summary: the completion text, trimmed
pub fn parse_summary(response: &str) -> String {
    response.trim().to_string()
}

/// Parse `severity: description` lines
///
/// Splits on the first `:` only, so descriptions may contain colons.
pub fn parse_risks(response: &str) -> Vec<RiskItem> {
    response
        .lines()
        .filter_map(|line| {
            let (tag, description) = line.split_once(':')?;
            match Severity::parse(tag) {
                Some(severity) => Some(RiskItem::new(severity, description.trim())),
                None => {
                    trace!(line, "Dropping risk line with unknown severity");
                    None
                }
            }
        })
        .collect()
}

/// Parse `type: YYYY-MM-DD` lines
pub fn parse_dates(response: &str) -> Vec<DateItem> {
    response
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let (kind, date) = line.split_once(':')?;
            let item = DateItem::new(kind.trim(), date.trim());
            if item.is_none() {
                trace!(line, "Dropping date line with invalid date");
            }
            item
        })
        .collect()
}
