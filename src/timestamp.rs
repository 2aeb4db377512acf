//! Human-readable rendering of upstream epoch timestamps.
//!
//! The upstream reports times as epoch seconds, sometimes as JSON numbers and
//! sometimes as strings. Formatting never fails: a value that is not an
//! epoch comes back untouched so the page can still be rendered.
use chrono::{DateTime, Datelike, Local, TimeZone, Utc};
use serde_json::Value;
use std::fmt::Display;

/// `01 January 2021 12:00 AM`
pub const DISPLAY_FORMAT: &str = "%d %B %Y %I:%M %p";

/// Years that fit the four-digit `DISPLAY_FORMAT`.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// Outcome of formatting an upstream timestamp.
#[derive(Debug, Clone, PartialEq)]
pub enum FormattedTimestamp {
    /// The value was an epoch and has been rendered.
    Formatted(String),
    /// The value could not be read as an epoch; carries the input unchanged.
    Unparsed(Value),
}

impl FormattedTimestamp {
    pub fn is_formatted(&self) -> bool {
        matches!(self, FormattedTimestamp::Formatted(_))
    }

    /// JSON value to store back into the document.
    pub fn into_value(self) -> Value {
        match self {
            FormattedTimestamp::Formatted(text) => Value::String(text),
            FormattedTimestamp::Unparsed(original) => original,
        }
    }
}

/// Reads a JSON value as whole epoch seconds.
///
/// Accepts integers, finite floats (truncated toward zero) and strings that
/// hold a signed integer with optional surrounding whitespace.
pub fn parse_epoch_seconds(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Interprets a JSON value as an epoch instant in `tz`.
///
/// Returns `None` when the value is not an epoch or lands outside the
/// calendar years `MIN_YEAR..=MAX_YEAR` in `tz`.
pub fn epoch_to_datetime<Tz: TimeZone>(value: &Value, tz: &Tz) -> Option<DateTime<Tz>> {
    let secs = parse_epoch_seconds(value)?;
    DateTime::<Utc>::from_timestamp(secs, 0)
        .map(|utc| utc.with_timezone(tz))
        .filter(|dt| (MIN_YEAR..=MAX_YEAR).contains(&dt.year()))
}

/// Formats an epoch value in the given time zone.
pub fn format_timestamp_in<Tz>(value: &Value, tz: &Tz) -> FormattedTimestamp
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match epoch_to_datetime(value, tz) {
        Some(dt) => FormattedTimestamp::Formatted(dt.format(DISPLAY_FORMAT).to_string()),
        None => FormattedTimestamp::Unparsed(value.clone()),
    }
}

/// Formats an epoch value in the server's local time zone.
pub fn format_timestamp(value: &Value) -> FormattedTimestamp {
    format_timestamp_in(value, &Local)
}
