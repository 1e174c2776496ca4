//! `HolidaySource`: the jurisdiction holiday table.

use wc_core::errors::Result;
use wc_time::Date;

/// A single public holiday.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Holiday {
    /// The date the holiday falls on.
    pub date: Date,
    /// Holiday name.
    pub name: String,
}

impl Holiday {
    /// Create a holiday record.
    pub fn new(date: Date, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }
}

/// Supplies the public holidays of one jurisdiction, year by year.
///
/// Implementations must be deterministic: the same year always yields the
/// same holidays. Dates returned for `year` must lie in `year`.
pub trait HolidaySource: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Lithuania"`).
    fn name(&self) -> &str;

    /// The holidays falling in `year`, in any order.
    fn year_holidays(&self, year: i32) -> Result<Vec<Holiday>>;
}
