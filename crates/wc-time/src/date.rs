//! `Date` type.
//!
//! Dates are stored as a serial number of days relative to the Unix epoch
//! (serial 0 = 1970-01-01) on the proleptic Gregorian calendar.
//!
//! # Valid range
//! * `Date::MIN` = 0001-01-01 (serial -719 162)
//! * `Date::MAX` = 9999-12-31 (serial 2 932 896)
//!
//! Construction outside that range, and arithmetic that would leave it,
//! fails with [`Error::Date`].

use std::str::FromStr;

use crate::month::Month;
use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use wc_core::errors::{Error, Result};

/// A calendar date represented as a serial day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Earliest supported date: January 1, year 1.
    pub const MIN: Date = Date(-719_162);

    /// Latest supported date: December 31, 9999.
    pub const MAX: Date = Date(2_932_896);

    /// Earliest supported year.
    pub const MIN_YEAR: i32 = 1;

    /// Latest supported year.
    pub const MAX_YEAR: i32 = 9999;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number (days since 1970-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from a serial already known to be in range.
    pub(crate) fn from_serial_unchecked(serial: i32) -> Self {
        debug_assert!(
            (Self::MIN.0..=Self::MAX.0).contains(&serial),
            "invalid date serial {serial}"
        );
        Date(serial)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (i32, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> i32 {
        self.ymd().0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let jan1 = serial_from_ymd(self.year(), 1, 1);
        (self.0 - jan1 + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday (ordinal 4).
        let w = ((self.0 + 3).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).unwrap_or(Weekday::Monday)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative moves backwards).
    pub fn add_days(self, n: i64) -> Result<Self> {
        let serial = self.0 as i64 + n;
        if serial < Self::MIN.0 as i64 || serial > Self::MAX.0 as i64 {
            return Err(Error::Date(format!(
                "{self} {n:+} days leaves the supported date range"
            )));
        }
        Ok(Date(serial as i32))
    }

    /// The following day.
    pub fn succ(self) -> Result<Self> {
        self.add_days(1)
    }

    /// Advance by `n` units of `unit`.
    ///
    /// Month and year steps keep the day of month, clamped to the last day
    /// of the target month: Jan 31 + 1 month is Feb 28 (or 29), and Feb 29
    /// + 1 year is Feb 28.
    pub fn advance(self, n: i64, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => self.add_days(n),
            TimeUnit::Weeks => self.add_days(n.saturating_mul(7)),
            TimeUnit::Months => {
                let (y, m, d) = self.ymd();
                let total = (y as i64 * 12 + (m as i64 - 1)).saturating_add(n);
                let new_y = total.div_euclid(12);
                let new_m = (total.rem_euclid(12) + 1) as u8;
                if new_y < Self::MIN_YEAR as i64 || new_y > Self::MAX_YEAR as i64 {
                    return Err(Error::Date(format!(
                        "{self} {n:+} months leaves the supported date range"
                    )));
                }
                let new_y = new_y as i32;
                Ok(Date(serial_from_ymd(
                    new_y,
                    new_m,
                    d.min(days_in_month(new_y, new_m)),
                )))
            }
            TimeUnit::Years => self.advance(n.saturating_mul(12), TimeUnit::Months),
        }
    }

    /// Return the *n*-th occurrence of `weekday` in `month` of `year`.
    ///
    /// `nth_weekday(1, Weekday::Sunday, 2024, Month::May)` is the first
    /// Sunday of May 2024 (2024-05-05).
    ///
    /// # Errors
    /// Returns an error if `n` is zero, the month has fewer than `n` such
    /// weekdays, or the year is out of range.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: i32, month: Month) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month.number(), 1)?;
        let skip = (weekday.ordinal() as i32 - first.weekday().ordinal() as i32).rem_euclid(7);
        let day = 1 + skip + 7 * (n as i32 - 1);
        if day > i32::from(month.days_in(year)) {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {month} {year}"
            )));
        }
        Date::from_ymd(year, month.number(), day as u8)
    }

    /// Today's date on the local clock.
    #[cfg(feature = "chrono")]
    pub fn today() -> Result<Self> {
        Date::try_from(chrono::Local::now().date_naive())
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs as i64).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-(rhs as i64)).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = *self - rhs;
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO-8601 calendar date (`YYYY-MM-DD`).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut parts = s.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(Error::Parse(format!("expected YYYY-MM-DD, got {s:?}")));
        };
        let field = |txt: &str, what: &str| -> Result<u32> {
            if txt.is_empty() || !txt.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::Parse(format!("invalid {what} {txt:?} in {s:?}")));
            }
            txt.parse::<u32>()
                .map_err(|e| Error::Parse(format!("invalid {what} {txt:?} in {s:?}: {e}")))
        };
        let year = field(y, "year")?;
        let month = field(m, "month")?;
        let day = field(d, "day")?;
        if year > Date::MAX_YEAR as u32 || month > 12 || day > 31 {
            return Err(Error::Parse(format!("{s:?} is not a valid date")));
        }
        Date::from_ymd(year as i32, month as u8, day as u8)
    }
}

// ── Interop ───────────────────────────────────────────────────────────────────

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        Date::from_ymd(d.year(), d.month() as u8, d.day() as u8)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<Date> for chrono::NaiveDate {
    type Error = Error;

    fn try_from(d: Date) -> Result<Self> {
        let (y, m, day) = d.ymd();
        chrono::NaiveDate::from_ymd_opt(y, m as u32, day as u32)
            .ok_or_else(|| Error::Date(format!("{d} not representable as chrono::NaiveDate")))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Days since 1970-01-01 for a civil date.
///
/// Works on 400-year eras starting at March 1 so that the leap day falls at
/// the end of each computational year.
fn serial_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let m = month as i32;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + day as i32 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`serial_from_ymd`].
fn ymd_from_serial(serial: i32) -> (i32, u8, u8) {
    let z = serial + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let y = yoe + era * 400 + i32::from(m <= 2);
    (y, m, d)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
