//! `DateRange`: an inclusive `[start, end]` span of dates.

use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use crate::date::Date;
use wc_core::ensure;
use wc_core::errors::{Error, Result};

/// An inclusive date range with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Create a range covering `start..=end`.
    ///
    /// # Errors
    /// [`Error::InvalidRange`] if `end < start`.
    pub fn new(start: Date, end: Date) -> Result<Self> {
        ensure!(
            start <= end,
            Error::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            }
        );
        Ok(Self { start, end })
    }

    /// First date of the range.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last date of the range.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Number of calendar days in the range, both ends included.
    pub fn len_days(&self) -> u32 {
        (self.end - self.start) as u32 + 1
    }

    /// Every calendar year the range touches.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.start.year()..=self.end.year()
    }

    /// Iterate the dates of the range in ascending order.
    pub fn iter(&self) -> DateIter {
        DateIter {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = Date;
    type IntoIter = DateIter;

    fn into_iter(self) -> DateIter {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = Date;
    type IntoIter = DateIter;

    fn into_iter(self) -> DateIter {
        self.iter()
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Day-by-day iterator over a [`DateRange`].
#[derive(Debug, Clone)]
pub struct DateIter {
    next: Option<Date>,
    end: Date,
}

impl Iterator for DateIter {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next?;
        // `end` is a valid date, so stepping past any earlier date stays in range.
        self.next = (current < self.end).then(|| Date::from_serial_unchecked(current.serial() + 1));
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self
            .next
            .map_or(0, |d| (self.end.serial() - d.serial() + 1) as usize);
        (n, Some(n))
    }
}

impl ExactSizeIterator for DateIter {}

impl FusedIterator for DateIter {}
