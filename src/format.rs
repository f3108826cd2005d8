//! Breaks a millisecond duration into days, hours, minutes and seconds.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_countdown::format::breakdown;
//!
//! let units = breakdown(90_000);
//! let pairs: Vec<(&str, &str)> = units.iter().map(|u| (u.label, u.value.as_str())).collect();
//! assert_eq!(
//!     pairs,
//!     vec![("days", "00"), ("hours", "00"), ("minutes", "01"), ("seconds", "30")]
//! );
//! ```

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Unit labels, in display order.
pub const LABELS: [&str; 4] = ["days", "hours", "minutes", "seconds"];

/// One component of a duration breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeUnit {
    /// One of [`LABELS`].
    pub label: &'static str,
    /// The numeric value zero-padded to at least two characters.
    pub value: String,
}

impl TimeUnit {
    fn new(label: &'static str, value: i64) -> Self {
        Self {
            label,
            value: pad(value),
        }
    }
}

/// Converts a duration in milliseconds into days, hours, minutes and seconds.
///
/// Uses floor division and a non-negative modulus, so the function is total
/// over every `i64`. Days are not wrapped: a duration of 120 days yields
/// `"120"`. Callers normally only pass positive durations.
///
/// # Examples
///
/// ```rust
/// use bubbletea_countdown::format::breakdown;
///
/// let units = breakdown(3 * 86_400_000 + 4 * 3_600_000);
/// assert_eq!(units[0].value, "03");
/// assert_eq!(units[1].value, "04");
/// ```
pub fn breakdown(duration_ms: i64) -> Vec<TimeUnit> {
    let seconds = duration_ms.div_euclid(MS_PER_SECOND).rem_euclid(60);
    let minutes = duration_ms.div_euclid(MS_PER_MINUTE).rem_euclid(60);
    let hours = duration_ms.div_euclid(MS_PER_HOUR).rem_euclid(24);
    let days = duration_ms.div_euclid(MS_PER_DAY);

    vec![
        TimeUnit::new(LABELS[0], days),
        TimeUnit::new(LABELS[1], hours),
        TimeUnit::new(LABELS[2], minutes),
        TimeUnit::new(LABELS[3], seconds),
    ]
}

// Width 2 counts the sign, matching "{:02}" for negatives ("-1").
fn pad(value: i64) -> String {
    format!("{:02}", value)
}
