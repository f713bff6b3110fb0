//! Utility functions for the revenue_forecast crate

use crate::error::{ForecastError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Currency suffix used for display
pub const CURRENCY_SUFFIX: &str = "руб.";

/// Format a monetary amount for display: `1234567.4` -> `"1 234 567 руб."`.
///
/// Rounds half to even, groups thousands with a space.
pub fn format_price(amount: f64) -> String {
    format!("{} {}", group_thousands(amount.round_ties_even()), CURRENCY_SUFFIX)
}

fn group_thousands(rounded: f64) -> String {
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}

/// Parse a sale date stored as ISO-8601 date or date-time text
pub fn parse_sale_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ForecastError::DataError(format!("Unrecognized date: {:?}", raw)))
}
