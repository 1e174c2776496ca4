//! `DurationSpec`: a length expressed either in calendar units or in
//! business days.

use std::str::FromStr;

use crate::time_unit::TimeUnit;
use wc_core::errors::{Error, Result};

/// A duration in one of the five supported units.
///
/// Calendar units accept any non-negative length; a business-day length
/// must be at least 1 (see [`DurationSpec::validate`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationSpec {
    /// Calendar days.
    Days(u32),
    /// Calendar weeks.
    Weeks(u32),
    /// Calendar months.
    Months(u32),
    /// Calendar years.
    Years(u32),
    /// Business days, counting the first business day on or after the start.
    BusinessDays(u32),
}

impl DurationSpec {
    /// Build a calendar-unit duration.
    pub fn calendar(unit: TimeUnit, amount: u32) -> Self {
        match unit {
            TimeUnit::Days => DurationSpec::Days(amount),
            TimeUnit::Weeks => DurationSpec::Weeks(amount),
            TimeUnit::Months => DurationSpec::Months(amount),
            TimeUnit::Years => DurationSpec::Years(amount),
        }
    }

    /// Number of units.
    pub fn amount(&self) -> u32 {
        match *self {
            DurationSpec::Days(n)
            | DurationSpec::Weeks(n)
            | DurationSpec::Months(n)
            | DurationSpec::Years(n)
            | DurationSpec::BusinessDays(n) => n,
        }
    }

    /// The calendar unit, or `None` for business days.
    pub fn time_unit(&self) -> Option<TimeUnit> {
        match self {
            DurationSpec::Days(_) => Some(TimeUnit::Days),
            DurationSpec::Weeks(_) => Some(TimeUnit::Weeks),
            DurationSpec::Months(_) => Some(TimeUnit::Months),
            DurationSpec::Years(_) => Some(TimeUnit::Years),
            DurationSpec::BusinessDays(_) => None,
        }
    }

    /// Check the unit-specific lower bound.
    ///
    /// # Errors
    /// [`Error::InvalidDuration`] for `BusinessDays(0)`.
    pub fn validate(&self) -> Result<()> {
        match self {
            DurationSpec::BusinessDays(0) => Err(Error::InvalidDuration(
                "business-day duration must be >= 1".into(),
            )),
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for DurationSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let abbr = match self {
            DurationSpec::Days(_) => "D",
            DurationSpec::Weeks(_) => "W",
            DurationSpec::Months(_) => "M",
            DurationSpec::Years(_) => "Y",
            DurationSpec::BusinessDays(_) => "BD",
        };
        write!(f, "{}{abbr}", self.amount())
    }
}

impl FromStr for DurationSpec {
    type Err = Error;

    /// Parse the compact form used by [`Display`](std::fmt::Display):
    /// `10d`, `2w`, `3m`, `1y`, `15bd` (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim().to_ascii_lowercase();
        let split = text
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| Error::Parse(format!("duration {s:?} has no unit suffix")))?;
        let (digits, suffix) = text.split_at(split);
        let amount: u32 = digits
            .parse()
            .map_err(|_| Error::Parse(format!("duration {s:?} has no valid length")))?;
        match suffix {
            "bd" => Ok(DurationSpec::BusinessDays(amount)),
            "d" => Ok(DurationSpec::Days(amount)),
            "w" => Ok(DurationSpec::Weeks(amount)),
            "m" => Ok(DurationSpec::Months(amount)),
            "y" => Ok(DurationSpec::Years(amount)),
            _ => Err(Error::Parse(format!(
                "duration {s:?} has unknown unit {suffix:?} (expected d, w, m, y or bd)"
            ))),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DurationSpec {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DurationSpec {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
