//! Crate error type.

use thiserror::Error;

/// Errors produced outside the countdown core.
///
/// The countdown itself never fails: an unreadable deadline is replaced by
/// the Unix epoch (see [`crate::deadline::parse_or_epoch`]). These errors
/// come from loading configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration document was not valid JSON for [`crate::Flags`].
    #[error("invalid countdown flags: {0}")]
    Flags(#[from] serde_json::Error),

    /// The deadline string could not be parsed.
    #[error(transparent)]
    Deadline(#[from] crate::deadline::DeadlineError),
}

/// Result alias for fallible configuration helpers.
pub type Result<T> = std::result::Result<T, Error>;
