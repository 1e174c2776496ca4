//! `TimeUnit`: calendar units a date can be advanced by.

use std::str::FromStr;

use wc_core::errors::{Error, Result};

/// A calendar unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TimeUnit {
    /// Calendar days.
    Days,
    /// Calendar weeks (7 days).
    Weeks,
    /// Calendar months, clamped to the end of the target month.
    Months,
    /// Calendar years (12 months).
    Years,
}

impl TimeUnit {
    /// Lower-case plural name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Days => "days",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Months => "months",
            TimeUnit::Years => "years",
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeUnit::Days => write!(f, "Day(s)"),
            TimeUnit::Weeks => write!(f, "Week(s)"),
            TimeUnit::Months => write!(f, "Month(s)"),
            TimeUnit::Years => write!(f, "Year(s)"),
        }
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    /// Accepts English singular/plural/abbreviated names and the Lithuanian
    /// plural (`dienos`, `savaitės`, `mėnesiai`, `metai`).
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "d" | "day" | "days" | "dienos" => Ok(TimeUnit::Days),
            "w" | "week" | "weeks" | "savaitės" => Ok(TimeUnit::Weeks),
            "m" | "month" | "months" | "mėnesiai" => Ok(TimeUnit::Months),
            "y" | "year" | "years" | "metai" => Ok(TimeUnit::Years),
            other => Err(Error::Parse(format!(
                "unknown time unit {other:?} (expected days, weeks, months or years)"
            ))),
        }
    }
}
