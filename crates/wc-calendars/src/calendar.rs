//! `Calendar` trait and the weekends-only calendar.
//!
//! A calendar knows which dates are public holidays and, from that, which
//! dates are business days.

use wc_core::errors::Result;
use wc_time::Date;

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Lithuania"`).
    fn name(&self) -> &str;

    /// Name of the public holiday on `date`, if any.
    fn holiday_name(&self, date: Date) -> Option<&str>;

    /// Return `true` if `date` is a listed public holiday.
    ///
    /// Weekends are not holidays unless a holiday falls on them.
    fn is_holiday(&self, date: Date) -> bool {
        self.holiday_name(date).is_some()
    }

    /// Return `true` if `date` is a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return `true` if `date` is Monday–Friday and not a public holiday.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// The first business day on or after `date`.
    ///
    /// # Errors
    /// Fails if no business day exists before the end of the supported
    /// date range.
    fn next_business_day(&self, mut date: Date) -> Result<Date> {
        while !self.is_business_day(date) {
            date = date.succ()?;
        }
        Ok(date)
    }
}

/// A calendar with no public holidays: only Saturdays and Sundays are
/// non-business days.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn holiday_name(&self, _date: Date) -> Option<&str> {
        None
    }
}
