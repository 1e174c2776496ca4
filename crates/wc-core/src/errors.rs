//! Error types for workcal.
//!
//! The three validation kinds (`InvalidRange`, `InvalidDuration`,
//! `InvalidWeekNumber`) are the ones a user can trigger through the
//! calculators; the remaining kinds cover date arithmetic leaving the
//! supported range, malformed textual input and bad configuration.

use thiserror::Error;

/// The top-level error type used throughout workcal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A date range whose end lies before its start.
    #[error("invalid range: end date {end} is before start date {start}")]
    InvalidRange {
        /// Start of the rejected range (ISO-8601).
        start: String,
        /// End of the rejected range (ISO-8601).
        end: String,
    },

    /// A duration that cannot be projected (e.g. zero business days).
    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    /// A (year, week) pair that is not a valid ISO-8601 week.
    #[error("invalid week number: week {week} does not exist in ISO year {year}")]
    InvalidWeekNumber {
        /// The requested ISO year.
        year: i32,
        /// The requested week number, as given.
        week: i64,
    },

    /// Date construction or arithmetic outside the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// Malformed textual input (dates, durations, units).
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid or unreadable configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Return `true` for the kinds caused by user input to one of the
    /// calculators, as opposed to out-of-range arithmetic or bad config.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidRange { .. } | Error::InvalidDuration(_) | Error::InvalidWeekNumber { .. }
        )
    }
}

/// Shorthand `Result` type used throughout workcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err($err)` from the enclosing function unless `$cond` holds.
///
/// # Example
/// ```
/// use wc_core::{ensure, Error};
/// fn at_least_one(n: i64) -> wc_core::Result<i64> {
///     ensure!(n >= 1, Error::InvalidDuration(format!("{n} < 1")));
///     Ok(n)
/// }
/// assert!(at_least_one(1).is_ok());
/// assert!(at_least_one(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}
