//! # workcal
//!
//! Calendar arithmetic against the Lithuanian public holiday calendar:
//! workday counts, holiday lists, ISO-week dates and period-end dates.
//!
//! ```
//! use workcal::{Date, Settings, Workcal};
//!
//! let wc = Workcal::new(Settings::default()).unwrap();
//! let start = Date::from_ymd(2024, 12, 23).unwrap();
//! let end = Date::from_ymd(2024, 12, 31).unwrap();
//!
//! let summary = wc.analyze_range(start, end).unwrap();
//! assert_eq!(summary.calendar_days, 9);
//! assert_eq!(summary.work_days, 4); // Dec 24–26 are public holidays
//!
//! let due = wc.project_business_period(start, 5).unwrap();
//! assert_eq!(due, Date::from_ymd(2025, 1, 2).unwrap()); // Jan 1 is skipped too
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`range`] | Calendar-day and workday counts, holidays in a range |
//! | [`projection`] | Period-end dates in calendar units or business days |
//! | [`week`] | Dates of an ISO week |
//! | [`settings`] | TOML-backed settings |
//! | [`facade`] | [`Workcal`], the four user-facing calculations |

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The `Workcal` facade.
pub mod facade;

/// Period-end projection.
pub mod projection;

/// Range analysis.
pub mod range;

/// Settings.
pub mod settings;

/// ISO-week resolution.
pub mod week;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use facade::Workcal;
pub use projection::{
    business_span, nearest_workday_forward, project, project_business_days, project_calendar,
    BusinessSpan,
};
pub use range::{analyze, calendar_day_count, holidays_in_range, workday_count, RangeAnalysis};
pub use settings::Settings;
pub use week::{week_dates, WeekDates};

pub use wc_calendars::{Calendar, Holiday, HolidaySet, HolidaySource, Language, Lithuania};
pub use wc_core::{Error, Result};
pub use wc_time::{Date, DateRange, DurationSpec, TimeUnit, Weekday};
