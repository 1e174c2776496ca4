//! # wc-time
//!
//! Proleptic Gregorian dates and the units used to move between them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `DateRange`: an inclusive span of dates.
pub mod date_range;

/// `DurationSpec`: a length expressed in calendar or business-day units.
pub mod duration;

/// ISO-8601 week numbering.
pub mod iso_week;

/// `Month`: month of the year.
pub mod month;

/// `TimeUnit`: days, weeks, months, years.
pub mod time_unit;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use date_range::{DateIter, DateRange};
pub use duration::DurationSpec;
pub use iso_week::{iso_week_dates, weeks_in_iso_year};
pub use month::Month;
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
