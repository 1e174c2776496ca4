//! ISO-8601 week numbering.
//!
//! Weeks run Monday to Sunday; week 1 of an ISO year is the week holding
//! that year's first Thursday (equivalently, the week holding January 4).
//! An ISO year therefore has 52 or 53 weeks, and its first and last weeks
//! may spill into the neighbouring calendar years.

use crate::date::Date;
use crate::weekday::Weekday;
use wc_core::ensure;
use wc_core::errors::{Error, Result};

/// Number of ISO weeks (52 or 53) in ISO year `year`.
///
/// A year has 53 weeks when it starts on a Thursday, or when it is a leap
/// year starting on a Wednesday.
pub fn weeks_in_iso_year(year: i32) -> u32 {
    // Weekday offset of December 31 of `y`; 4 means Thursday.
    let p = |y: i32| (y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)).rem_euclid(7);
    if p(year) == 4 || p(year - 1) == 3 {
        53
    } else {
        52
    }
}

/// The seven dates (Monday through Sunday) of ISO week `week` of `year`.
///
/// # Errors
/// [`Error::InvalidWeekNumber`] when `week` is 0, exceeds
/// [`weeks_in_iso_year`], or the week falls outside the supported date range.
pub fn iso_week_dates(year: i32, week: u32) -> Result<[Date; 7]> {
    let monday = Date::from_iso_week_date(year, week, Weekday::Monday)?;
    let invalid = || Error::InvalidWeekNumber { year, week: i64::from(week) };
    let sunday = monday.add_days(6).map_err(|_| invalid())?;
    let mut days = [monday; 7];
    for (offset, slot) in (0..).zip(days.iter_mut()) {
        *slot = Date::from_serial_unchecked(monday.serial() + offset);
    }
    debug_assert_eq!(days[6], sunday);
    Ok(days)
}

impl Date {
    /// Return the ISO `(year, week)` this date belongs to.
    ///
    /// The ISO year differs from the calendar year for dates in the first
    /// or last few days of January / December.
    pub fn iso_week(&self) -> (i32, u32) {
        // The Thursday of the same ISO week decides year and week number.
        // MIN is a Monday and MAX a Friday, so the Thursday is always in range.
        let thursday = Date::from_serial_unchecked(self.serial() + 4 - self.weekday().ordinal() as i32);
        let week = (thursday.day_of_year() as u32 - 1) / 7 + 1;
        (thursday.year(), week)
    }

    /// Build a date from its ISO week-date form (year, week, weekday).
    ///
    /// # Errors
    /// [`Error::InvalidWeekNumber`] when the week does not exist in `year`
    /// or the date falls outside the supported range.
    pub fn from_iso_week_date(year: i32, week: u32, weekday: Weekday) -> Result<Self> {
        let invalid = || Error::InvalidWeekNumber { year, week: i64::from(week) };
        ensure!((Date::MIN_YEAR..=Date::MAX_YEAR).contains(&year), invalid());
        ensure!((1..=weeks_in_iso_year(year)).contains(&week), invalid());

        let jan4 = Date::from_ymd(year, 1, 4).map_err(|_| invalid())?;
        let offset = i64::from(week - 1) * 7 + i64::from(weekday.ordinal())
            - i64::from(jan4.weekday().ordinal());
        jan4.add_days(offset).map_err(|_| invalid())
    }
}
