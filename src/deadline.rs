//! Deadline parsing.
//!
//! Turns a human-readable date-time string into milliseconds since the Unix
//! epoch. Strings without an offset are read as UTC.
//!
//! ```rust
//! use bubbletea_countdown::deadline::{parse, parse_or_epoch};
//!
//! assert_eq!(parse("1970-01-01T00:00:01Z").unwrap(), 1_000);
//! assert_eq!(parse_or_epoch("not a date"), 0);
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Timestamp used when a deadline cannot be parsed.
pub const EPOCH: i64 = 0;

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%B %d, %Y %H:%M:%S",
    "%b %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
    "%b %d, %Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y"];

/// The deadline string matched none of the supported formats.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized deadline {input:?}")]
pub struct DeadlineError {
    /// The rejected input, untrimmed.
    pub input: String,
}

/// Parses a deadline into milliseconds since the Unix epoch.
///
/// Accepts RFC 3339, RFC 2822, ISO-like `YYYY-MM-DD[ HH:MM[:SS]]` forms and
/// long English dates such as `December 31, 2026 23:59:59`.
pub fn parse(input: &str) -> Result<i64, DeadlineError> {
    let s = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt.timestamp_millis());
    }
    for fmt in DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc().timestamp_millis());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            if let Some(naive) = date.and_hms_opt(0, 0, 0) {
                return Ok(naive.and_utc().timestamp_millis());
            }
        }
    }

    Err(DeadlineError {
        input: input.to_string(),
    })
}

/// Parses a deadline, substituting [`EPOCH`] when it is unreadable.
///
/// The fallback usually produces a countdown that expires on its first tick.
pub fn parse_or_epoch(input: &str) -> i64 {
    match parse(input) {
        Ok(ms) => ms,
        Err(err) => {
            tracing::warn!(%err, "falling back to the Unix epoch");
            EPOCH
        }
    }
}
