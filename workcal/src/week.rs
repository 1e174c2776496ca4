//! ISO-week resolution.

use serde::Serialize;
use tracing::debug;

use wc_core::errors::{Error, Result};
use wc_time::{iso_week_dates, Date};

/// The seven dates of one ISO week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekDates {
    /// ISO year.
    pub year: i32,
    /// ISO week number.
    pub week: u32,
    /// Monday through Sunday.
    pub days: [Date; 7],
}

/// Monday through Sunday of ISO week `week` of `year`.
///
/// `week` is taken as entered, so a negative or oversized number is reported
/// as a missing week rather than rejected by the caller's parser.
///
/// # Errors
/// [`Error::InvalidWeekNumber`] if the week does not exist.
pub fn week_dates(year: i32, week: i64) -> Result<WeekDates> {
    let week = u32::try_from(week).map_err(|_| Error::InvalidWeekNumber { year, week })?;
    let days = iso_week_dates(year, week)?;
    debug!(year, week, monday = %days[0], "week resolved");
    Ok(WeekDates { year, week, days })
}
