//! Fixed-width rendering of looked up rates

use super::date::DateKey;
use super::rate::RateRecord;

const DATE_WIDTH: usize = 12;
const RATE_WIDTH: usize = 14;

/// Column titles aligned with [`format_row`].
pub fn header_row() -> String {
    format!(
        "{:<DATE_WIDTH$}{:>RATE_WIDTH$}{:>RATE_WIDTH$}",
        "Date", "USD to CAD", "CAD to USD"
    )
}

/// Renders `date`, the published rate and the inverse as one aligned row.
pub fn format_row(date: DateKey, record: &RateRecord) -> String {
    format!(
        "{:<DATE_WIDTH$}{:>RATE_WIDTH$}{:>RATE_WIDTH$.4}",
        date.to_string(),
        record.raw,
        record.inverse
    )
}
