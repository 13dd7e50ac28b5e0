//! Display formatting for amounts and dates.
//!
//! Amounts are plain decimal numbers; the symbol is cosmetic and no
//! conversion ever happens.

use std::fmt::Write;

use chrono::{
    format::{Item, StrftimeItems},
    NaiveDate,
};

const GROUPING_SEPARATOR: char = ',';

/// Formats `value` as `<symbol><grouped integer>.<two decimals>`, with a
/// leading `-` for negative values (`-$1,230.50`).
pub fn format_currency_value(value: f64, symbol: &str) -> String {
    let rounded = format!("{:.2}", value.abs());
    let (integer, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    let sign = if value < 0.0 && rounded != "0.00" {
        "-"
    } else {
        ""
    };
    format!("{sign}{symbol}{}.{fraction}", group_digits(integer))
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(GROUPING_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

/// Returns `true` when `pattern` is a usable strftime-style date format.
/// Time-of-day specifiers are rejected since dates carry no time.
pub fn is_valid_date_format(pattern: &str) -> bool {
    try_format_date(NaiveDate::default(), pattern).is_some()
}

/// Formats a date with a chrono format string, falling back to ISO 8601 when
/// the pattern is empty or invalid.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    try_format_date(date, pattern).unwrap_or_else(|| date.to_string())
}

fn try_format_date(date: NaiveDate, pattern: &str) -> Option<String> {
    if pattern.trim().is_empty()
        || StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
    {
        return None;
    }
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).ok()?;
    Some(out)
}
