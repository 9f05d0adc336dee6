//! Date, relative-time and currency formatting for display.
//!
//! Timestamps come from the backend either as RFC 3339 strings or as naive
//! `YYYY-MM-DD[T| ]HH:MM:SS[.ffffff]` / `YYYY-MM-DD` strings. Naive values
//! are shown as written and treated as UTC when compared with "now";
//! offset-carrying values are shown in their own offset.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use serde_json::Value;
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

pub const DEFAULT_DATE_PATTERN: &str = "YYYY-MM-DD";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "¥";

const NAIVE_DATETIME: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");
const NAIVE_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const THIRTY_DAYS: i64 = 30 * DAY;

/// Parse a backend timestamp. `None` for blank or unparseable input.
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(dt);
    }
    let normalized = raw.replacen(' ', "T", 1);
    if let Ok(dt) = PrimitiveDateTime::parse(&normalized, NAIVE_DATETIME) {
        return Some(dt.assume_utc());
    }
    Date::parse(raw, NAIVE_DATE)
        .ok()
        .map(|d| d.midnight().assume_utc())
}

/// Render `raw` with a token pattern.
///
/// Tokens: `YYYY` year, `MM` month, `DD` day, `HH` hour, `mm` minute,
/// `ss` second, all zero-padded. Each token is substituted once, at its
/// first occurrence. Blank or invalid input renders as an empty string.
pub fn format_date(raw: &str, pattern: &str) -> String {
    parse_timestamp(raw).map_or_else(String::new, |dt| format_datetime(dt, pattern))
}

/// Render `dt` in its own offset with the `format_date` tokens.
pub fn format_datetime(dt: OffsetDateTime, pattern: &str) -> String {
    pattern
        .replacen("YYYY", &format!("{:04}", dt.year()), 1)
        .replacen("MM", &format!("{:02}", u8::from(dt.month())), 1)
        .replacen("DD", &format!("{:02}", dt.day()), 1)
        .replacen("HH", &format!("{:02}", dt.hour()), 1)
        .replacen("mm", &format!("{:02}", dt.minute()), 1)
        .replacen("ss", &format!("{:02}", dt.second()), 1)
}

/// Current time in the local offset, or UTC when the offset is unknown.
pub fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// "刚刚" / "N分钟前" / "N小时前" / "N天前", or the date once past 30 days.
pub fn format_relative_time(raw: &str) -> String {
    format_relative_time_at(raw, OffsetDateTime::now_utc())
}

pub fn format_relative_time_at(raw: &str, now: OffsetDateTime) -> String {
    let Some(then) = parse_timestamp(raw) else {
        return String::new();
    };
    let elapsed = (now - then).whole_seconds();
    if elapsed < MINUTE {
        "刚刚".to_owned()
    } else if elapsed < HOUR {
        format!("{}分钟前", elapsed / MINUTE)
    } else if elapsed < DAY {
        format!("{}小时前", elapsed / HOUR)
    } else if elapsed < THIRTY_DAYS {
        format!("{}天前", elapsed / DAY)
    } else {
        format_datetime(then, DEFAULT_DATE_PATTERN)
    }
}

/// `¥` amount with two decimals.
pub fn format_currency(amount: f64) -> String {
    format_currency_with(amount, DEFAULT_CURRENCY_SYMBOL)
}

/// Amount with two decimals and a custom symbol. Non-finite amounts render
/// as zero.
pub fn format_currency_with(amount: f64, symbol: &str) -> String {
    let amount = if amount.is_finite() && amount != 0.0 { amount } else { 0.0 };
    format!("{symbol}{amount:.2}")
}

/// Currency for an untyped JSON field; anything but a number renders as
/// zero.
pub fn format_currency_value(amount: &Value) -> String {
    format_currency(amount.as_f64().unwrap_or(0.0))
}
