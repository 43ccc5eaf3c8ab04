//! Clock access and timestamp rendering

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use std::time::{SystemTime, UNIX_EPOCH};

/// `strftime` pattern for rendered claims, e.g. `Jan 1, 2024, 12:00:00 AM UTC`
const TIMESTAMP_FORMAT: &str = "%b %-d, %Y, %I:%M:%S %p %Z";

/// Get current Unix timestamp
pub fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| std::time::Duration::from_secs(0))
        .as_secs() as i64
}

/// Render Unix seconds in the local timezone
///
/// chrono has no zone abbreviations for `Local`, so the zone renders as a
/// numeric offset such as `+02:00`.
pub fn format_timestamp(timestamp: f64) -> String {
    format_timestamp_in(timestamp, &Local)
}

/// Render Unix seconds in the given timezone
///
/// Fractional seconds are dropped (rounded toward negative infinity). Values
/// chrono cannot represent fall back to the raw number. The zone is written
/// as the offset's `Display`: `UTC` for `Utc`, `+02:00` for `FixedOffset`
/// and `Local`.
pub fn format_timestamp_in<Tz>(timestamp: f64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match to_datetime(timestamp) {
        Some(utc) => utc
            .with_timezone(tz)
            .format(TIMESTAMP_FORMAT)
            .to_string(),
        None => format!("{timestamp} (out of range)"),
    }
}

fn to_datetime(timestamp: f64) -> Option<DateTime<chrono::Utc>> {
    if !timestamp.is_finite() {
        return None;
    }
    let seconds = timestamp.floor();
    if seconds < i64::MIN as f64 || seconds > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp(seconds as i64, 0)
}
