//! Startup configuration for a countdown.

use serde::{Deserialize, Serialize};

/// Environment variable read by [`Flags::from_env`].
pub const DEADLINE_ENV: &str = "COUNTDOWN_DEADLINE";

/// Values supplied by the host when the countdown is mounted.
///
/// # Examples
///
/// ```rust
/// use bubbletea_countdown::Flags;
///
/// let flags = Flags::from_json(r#"{"deadline": "2027-01-01T00:00:00Z"}"#).unwrap();
/// assert_eq!(flags.deadline, "2027-01-01T00:00:00Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flags {
    /// Target date-time, in any format accepted by [`crate::deadline::parse`].
    pub deadline: String,
}

impl Flags {
    /// Creates flags for the given deadline string.
    pub fn new(deadline: impl Into<String>) -> Self {
        Self {
            deadline: deadline.into(),
        }
    }

    /// Reads flags from a JSON object such as `{"deadline": "..."}`.
    ///
    /// A missing `deadline` field yields an empty deadline, which the
    /// countdown treats as the Unix epoch.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the deadline from `COUNTDOWN_DEADLINE`, empty when unset.
    pub fn from_env() -> Self {
        Self::new(std::env::var(DEADLINE_ENV).unwrap_or_default())
    }

    /// Parses the deadline, failing hard instead of falling back to the epoch.
    pub fn expiration_time(&self) -> crate::Result<i64> {
        Ok(crate::deadline::parse(&self.deadline)?)
    }
}
