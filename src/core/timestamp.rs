//! Timestamp formatting and debug timing helpers
//!
//! Line timestamps use a fixed `year-day-month` layout with millisecond
//! precision, in local time: `2025-08-01 10:30:45.123` for 8 January 2025.
//!
//! The timing helpers let callers measure latency without branching on the
//! log level themselves. When the threshold is above Debug they return
//! constant values and never read the clock.

use super::log_level::LogLevel;
use chrono::{DateTime, Local, TimeZone, Utc};
use std::time::Duration;

/// strftime layout of the timestamp field on every line.
pub const LINE_TIMESTAMP_FORMAT: &str = "%Y-%d-%m %H:%M:%S%.3f";

/// Format a timestamp for the leading field of a log line.
#[must_use]
pub fn format_line_timestamp<Tz: TimeZone>(datetime: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    datetime.format(LINE_TIMESTAMP_FORMAT).to_string()
}

/// Current local time, formatted for a log line.
#[must_use]
pub fn line_timestamp_now() -> String {
    format_line_timestamp(&Local::now())
}

/// Current time if `min_level` is Debug, the Unix epoch otherwise.
#[must_use]
pub fn debug_now(min_level: LogLevel) -> DateTime<Utc> {
    if min_level == LogLevel::Debug {
        Utc::now()
    } else {
        DateTime::<Utc>::UNIX_EPOCH
    }
}

/// Time elapsed since `start` if `min_level` is Debug, zero otherwise.
///
/// A `start` in the future also yields zero.
#[must_use]
pub fn debug_elapsed(min_level: LogLevel, start: DateTime<Utc>) -> Duration {
    if min_level != LogLevel::Debug {
        return Duration::ZERO;
    }
    (Utc::now() - start).to_std().unwrap_or(Duration::ZERO)
}
