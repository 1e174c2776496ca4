//! `Workcal`: the four user-facing calculations behind one type.
//!
//! Each method validates its input and fails with one of the validation
//! kinds (`InvalidRange`, `InvalidDuration`, `InvalidWeekNumber`) rather
//! than panicking, so a UI or CLI can show the message directly.

use std::sync::Arc;

use tracing::debug;

use crate::projection::{self, BusinessSpan};
use crate::range::{self, RangeAnalysis};
use crate::settings::Settings;
use crate::week::{self, WeekDates};
use wc_calendars::{Holiday, HolidaySet, HolidaySource, Lithuania};
use wc_core::ensure;
use wc_core::errors::{Error, Result};
use wc_time::{Date, DateRange, DurationSpec, TimeUnit};

/// Calendar calculator bound to one holiday source.
///
/// Holds no mutable state; one instance can serve any number of
/// independent calculations.
#[derive(Debug, Clone)]
pub struct Workcal {
    source: Arc<dyn HolidaySource>,
    settings: Settings,
}

impl Workcal {
    /// Calculator on the Lithuanian calendar, names in `settings.language`.
    pub fn new(settings: Settings) -> Result<Self> {
        let source = Arc::new(Lithuania::new(settings.language));
        Self::with_source(source, settings)
    }

    /// Calculator on any holiday source.
    pub fn with_source(source: Arc<dyn HolidaySource>, settings: Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { source, settings })
    }

    /// The settings in use.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The holiday source in use.
    pub fn source(&self) -> &Arc<dyn HolidaySource> {
        &self.source
    }

    /// Build a holiday set for `years`.
    pub fn holidays_for<I>(&self, years: I) -> Result<HolidaySet>
    where
        I: IntoIterator<Item = i32>,
    {
        HolidaySet::build(Arc::clone(&self.source), years)
    }

    /// Calendar days, workdays and holidays in `[start, end]`.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] if `end < start`.
    pub fn analyze_range(&self, start: Date, end: Date) -> Result<RangeAnalysis> {
        let span = DateRange::new(start, end)?;
        let calendar = self.holidays_for(span.years())?;
        debug_assert!(calendar.covers_range(&span));
        Ok(range::analyze(&span, &calendar))
    }

    /// Monday through Sunday of ISO week `week` of `year`.
    ///
    /// # Errors
    /// [`Error::InvalidWeekNumber`] if the week does not exist.
    pub fn week_dates(&self, year: i32, week: i64) -> Result<WeekDates> {
        week::week_dates(year, week)
    }

    /// `start` advanced by `amount` calendar units.
    pub fn project_calendar_period(&self, start: Date, unit: TimeUnit, amount: u32) -> Result<Date> {
        let end = projection::project_calendar(start, unit, amount)?;
        debug!(%start, %unit, amount, %end, "calendar period projected");
        Ok(end)
    }

    /// The `n`-th business day counted from `start` (see
    /// [`projection::project_business_days`]).
    ///
    /// # Errors
    /// [`Error::InvalidDuration`] if `n < 1` or `n` exceeds
    /// [`Settings::max_business_days`].
    pub fn project_business_period(&self, start: Date, n: i64) -> Result<Date> {
        self.business_span(start, n).map(|span| span.end)
    }

    /// Business day 1 and business day `n` counted from `start`.
    ///
    /// Uncovered years are added [`Settings::lookahead_years`] at a time.
    ///
    /// # Errors
    /// As [`Workcal::project_business_period`].
    pub fn business_span(&self, start: Date, n: i64) -> Result<BusinessSpan> {
        ensure!(
            n >= 1,
            Error::InvalidDuration(format!("business-day duration must be >= 1, got {n}"))
        );
        if let Some(max) = self.settings.max_business_days {
            ensure!(
                n <= i64::from(max),
                Error::InvalidDuration(format!("business-day duration {n} exceeds the limit of {max}"))
            );
        }
        let calendar = self.holidays_for(self.lookahead(start))?;
        projection::business_span(start, n, &calendar, self.settings.lookahead_years)
    }

    /// Project `start` by any [`DurationSpec`].
    pub fn project(&self, start: Date, duration: DurationSpec) -> Result<Date> {
        duration.validate()?;
        match duration.time_unit() {
            Some(unit) => self.project_calendar_period(start, unit, duration.amount()),
            None => self.project_business_period(start, i64::from(duration.amount())),
        }
    }

    /// All holidays of `year`, in ascending date order.
    pub fn year_holidays(&self, year: i32) -> Result<Vec<Holiday>> {
        let set = self.holidays_for([year])?;
        Ok(set.iter().map(|(d, name)| Holiday::new(d, name)).collect())
    }

    /// Years pre-built for a projection starting at `start`, clipped to the
    /// supported date range.
    fn lookahead(&self, start: Date) -> std::ops::Range<i32> {
        let first = start.year();
        let last = (first + i32::from(self.settings.lookahead_years)).min(Date::MAX_YEAR + 1);
        first..last
    }
}
