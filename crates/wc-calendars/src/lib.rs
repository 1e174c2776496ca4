//! # wc-calendars
//!
//! Public holiday tables and the business-day predicate built on them.
//!
//! A [`HolidaySource`] is the jurisdiction rule book: given a year it lists
//! that year's holidays. A [`HolidaySet`] materialises a source for an
//! explicit set of years and answers lookups; it never changes after
//! construction, and covering more years means building a new set with
//! [`HolidaySet::extended`]. Anything implementing [`Calendar`] can answer
//! "is this a business day?".

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// User-defined holiday source.
pub mod bespoke;

/// `Calendar` trait and the weekends-only calendar.
pub mod calendar;

/// Western (Gregorian) Easter computus.
pub mod easter;

/// Immutable holiday set built from a source for a set of years.
pub mod holiday_set;

/// Language of holiday names.
pub mod language;

/// Lithuanian public holidays.
pub mod lithuania;

/// `HolidaySource` trait and the `Holiday` record.
pub mod source;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use bespoke::BespokeHolidays;
pub use calendar::{Calendar, WeekendsOnly};
pub use easter::{easter_monday, easter_sunday};
pub use holiday_set::HolidaySet;
pub use language::Language;
pub use lithuania::Lithuania;
pub use source::{Holiday, HolidaySource};
