//! Range analysis over an inclusive `[start, end]` span.
//!
//! All functions expect the calendar to cover every year the range
//! touches; dates in uncovered years are treated as having no holiday.

use serde::Serialize;
use tracing::debug;

use wc_calendars::{Calendar, Holiday};
use wc_time::{Date, DateRange};

/// Calendar days, workdays and holidays within one date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeAnalysis {
    /// First date of the range.
    pub start: Date,
    /// Last date of the range.
    pub end: Date,
    /// Number of calendar days, both ends included.
    pub calendar_days: u32,
    /// Number of business days.
    pub work_days: u32,
    /// Public holidays in ascending date order.
    pub holidays: Vec<Holiday>,
}

/// Number of calendar days in `range`, both ends included.
pub fn calendar_day_count(range: &DateRange) -> u32 {
    range.len_days()
}

/// Number of business days in `range`.
pub fn workday_count<C>(range: &DateRange, calendar: &C) -> u32
where
    C: Calendar + ?Sized,
{
    range.iter().filter(|&d| calendar.is_business_day(d)).count() as u32
}

/// The public holidays in `range`, in ascending date order.
pub fn holidays_in_range<C>(range: &DateRange, calendar: &C) -> Vec<Holiday>
where
    C: Calendar + ?Sized,
{
    range
        .iter()
        .filter_map(|d| calendar.holiday_name(d).map(|name| Holiday::new(d, name)))
        .collect()
}

/// Run all three range measurements.
pub fn analyze<C>(range: &DateRange, calendar: &C) -> RangeAnalysis
where
    C: Calendar + ?Sized,
{
    let analysis = RangeAnalysis {
        start: range.start(),
        end: range.end(),
        calendar_days: calendar_day_count(range),
        work_days: workday_count(range, calendar),
        holidays: holidays_in_range(range, calendar),
    };
    debug!(
        %range,
        calendar = calendar.name(),
        calendar_days = analysis.calendar_days,
        work_days = analysis.work_days,
        holidays = analysis.holidays.len(),
        "range analysed"
    );
    analysis
}
