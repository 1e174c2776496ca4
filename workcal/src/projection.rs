//! Period-end projection.
//!
//! Two independent algorithms: calendar-unit projection (days, weeks,
//! months, years with end-of-month clamping) and business-day projection.
//!
//! Business-day projection walks forward one day at a time. Whenever the
//! walk enters a year the holiday set does not cover, the set is extended
//! by a block of years starting there before the date is tested, so the
//! caller's set only needs to cover the start year. The walk is unbounded:
//! callers handling untrusted input should cap `n` (see
//! [`crate::Settings::max_business_days`]).

use std::borrow::Cow;

use tracing::{debug, trace};

use wc_calendars::{Calendar, HolidaySet};
use wc_core::ensure;
use wc_core::errors::{Error, Result};
use wc_time::{Date, DurationSpec, TimeUnit};

/// `start` advanced by `amount` units of `unit`.
///
/// Months and years clamp to the last day of the target month. `amount = 0`
/// returns `start`.
pub fn project_calendar(start: Date, unit: TimeUnit, amount: u32) -> Result<Date> {
    start.advance(i64::from(amount), unit)
}

/// Years added per extension when the walk leaves the covered years.
pub const EXTENSION_YEARS: u16 = 5;

/// Where a business-day count starts and ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessSpan {
    /// Date the count was requested from.
    pub start: Date,
    /// Business day 1: the first business day on or after `start`.
    pub first: Date,
    /// Business day `n`.
    pub end: Date,
}

/// The date of the `n`-th business day counted from `start`.
///
/// If `start` is not a business day the count begins at the first business
/// day after it; that day is business day 1.
///
/// # Errors
/// [`Error::InvalidDuration`] if `n < 1`; [`Error::Date`] if the walk runs
/// past the supported date range.
pub fn project_business_days(start: Date, n: i64, calendar: &HolidaySet) -> Result<Date> {
    business_span(start, n, calendar, EXTENSION_YEARS).map(|span| span.end)
}

/// Like [`project_business_days`], also reporting business day 1.
///
/// Uncovered years are added `extend_years` at a time (at least one).
pub fn business_span(
    start: Date,
    n: i64,
    calendar: &HolidaySet,
    extend_years: u16,
) -> Result<BusinessSpan> {
    ensure!(
        n >= 1,
        Error::InvalidDuration(format!("business-day duration must be >= 1, got {n}"))
    );
    let mut walk = CoveringWalk::new(calendar, extend_years);
    let first = walk.first_workday_from(start)?;
    let mut date = first;
    let mut remaining = n - 1;
    while remaining > 0 {
        date = date.succ()?;
        if walk.is_workday(date)? {
            remaining -= 1;
            trace!(%date, remaining, "business day consumed");
        }
    }
    debug!(%start, %first, n, end = %date, "business days projected");
    Ok(BusinessSpan {
        start,
        first,
        end: date,
    })
}

/// The first business day on or after `date`.
///
/// Extends `calendar` as needed, like [`project_business_days`].
pub fn nearest_workday_forward(date: Date, calendar: &HolidaySet) -> Result<Date> {
    CoveringWalk::new(calendar, EXTENSION_YEARS).first_workday_from(date)
}

/// Project `start` by any [`DurationSpec`].
pub fn project(start: Date, duration: DurationSpec, calendar: &HolidaySet) -> Result<Date> {
    duration.validate()?;
    match duration.time_unit() {
        Some(unit) => project_calendar(start, unit, duration.amount()),
        None => project_business_days(start, i64::from(duration.amount()), calendar),
    }
}

/// Forward day-by-day walk over a holiday set that grows to cover each year
/// it visits. The caller's set is only cloned once an extension is needed.
struct CoveringWalk<'a> {
    calendar: Cow<'a, HolidaySet>,
    extend_years: i32,
}

impl<'a> CoveringWalk<'a> {
    fn new(calendar: &'a HolidaySet, extend_years: u16) -> Self {
        Self {
            calendar: Cow::Borrowed(calendar),
            extend_years: i32::from(extend_years.max(1)),
        }
    }

    fn is_workday(&mut self, date: Date) -> Result<bool> {
        let year = date.year();
        if !self.calendar.covers(year) {
            let last = (year + self.extend_years).min(Date::MAX_YEAR + 1);
            let extended = self.calendar.extended(year..last)?;
            self.calendar = Cow::Owned(extended);
        }
        Ok(self.calendar.is_business_day(date))
    }

    fn first_workday_from(&mut self, mut date: Date) -> Result<Date> {
        while !self.is_workday(date)? {
            date = date.succ()?;
        }
        Ok(date)
    }
}
