//! `HolidaySet`: the holidays of a source, materialised for a set of years.
//!
//! A set is immutable. Covering additional years produces a new set via
//! [`HolidaySet::extended`]; the original is left untouched, so a set can
//! be shared freely between independent calculations.
//!
//! Lookups for a date in a year the set does not cover report "no
//! holiday". Callers must make sure every year a query touches is covered.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::calendar::Calendar;
use crate::source::HolidaySource;
use wc_core::errors::Result;
use wc_time::{Date, DateRange};

/// Separator used when two holidays fall on the same date.
const NAME_SEPARATOR: &str = "; ";

/// Public holidays of one source for an explicit set of years.
#[derive(Clone)]
pub struct HolidaySet {
    source: Arc<dyn HolidaySource>,
    years: BTreeSet<i32>,
    holidays: BTreeMap<Date, String>,
}

impl HolidaySet {
    /// Build the holidays of `source` for every year in `years`.
    pub fn build<I>(source: Arc<dyn HolidaySource>, years: I) -> Result<Self>
    where
        I: IntoIterator<Item = i32>,
    {
        let empty = Self {
            source,
            years: BTreeSet::new(),
            holidays: BTreeMap::new(),
        };
        empty.extended(years)
    }

    /// Return a new set covering the union of this set's years and `years`.
    ///
    /// Years already covered are carried over as they are; only the new
    /// years are fetched from the source.
    pub fn extended<I>(&self, years: I) -> Result<Self>
    where
        I: IntoIterator<Item = i32>,
    {
        let missing: BTreeSet<i32> = years
            .into_iter()
            .filter(|y| !self.years.contains(y))
            .collect();
        if missing.is_empty() {
            return Ok(self.clone());
        }

        let mut next = self.clone();
        for &year in &missing {
            for holiday in self.source.year_holidays(year)? {
                debug_assert_eq!(holiday.date.year(), year, "{} reported outside {year}", holiday.date);
                next.holidays
                    .entry(holiday.date)
                    .and_modify(|name| {
                        if !name.split(NAME_SEPARATOR).any(|n| n == holiday.name) {
                            name.push_str(NAME_SEPARATOR);
                            name.push_str(&holiday.name);
                        }
                    })
                    .or_insert(holiday.name);
            }
            next.years.insert(year);
        }
        debug!(
            source = self.source.name(),
            added = ?missing,
            holidays = next.holidays.len(),
            "holiday set extended"
        );
        Ok(next)
    }

    /// Return `true` if `year` is covered by this set.
    pub fn covers(&self, year: i32) -> bool {
        self.years.contains(&year)
    }

    /// Return `true` if every year `range` touches is covered.
    pub fn covers_range(&self, range: &DateRange) -> bool {
        range.years().all(|y| self.covers(y))
    }

    /// Covered years in ascending order.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.iter().copied()
    }

    /// The source this set was built from.
    pub fn source(&self) -> &Arc<dyn HolidaySource> {
        &self.source
    }

    /// Name of the holiday on `date`, if any.
    pub fn get(&self, date: Date) -> Option<&str> {
        self.holidays.get(&date).map(String::as_str)
    }

    /// Return `true` if `date` is a holiday.
    pub fn contains(&self, date: Date) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Number of holiday dates.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Return `true` if the set holds no holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// All holidays in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, &str)> + '_ {
        self.holidays.iter().map(|(&d, n)| (d, n.as_str()))
    }

    /// Holidays within `range`, in ascending date order.
    pub fn holidays_between(&self, range: &DateRange) -> impl Iterator<Item = (Date, &str)> + '_ {
        self.holidays
            .range(range.start()..=range.end())
            .map(|(&d, n)| (d, n.as_str()))
    }
}

impl Calendar for HolidaySet {
    fn name(&self) -> &str {
        self.source.name()
    }

    fn holiday_name(&self, date: Date) -> Option<&str> {
        self.get(date)
    }
}

impl fmt::Debug for HolidaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HolidaySet")
            .field("source", &self.source.name())
            .field("years", &self.years)
            .field("holidays", &self.holidays.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bespoke::BespokeHolidays;
    use crate::source::Holiday;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn source() -> Arc<dyn HolidaySource> {
        Arc::new(
            BespokeHolidays::new("Test")
                .with_holiday(date(2024, 1, 1), "New Year")
                .with_holiday(date(2024, 12, 25), "Christmas")
                .with_holiday(date(2025, 1, 1), "New Year"),
        )
    }

    #[test]
    fn build_covers_requested_years_only() {
        let set = HolidaySet::build(source(), [2024]).unwrap();
        assert!(set.covers(2024));
        assert!(!set.covers(2025));
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(date(2024, 1, 1)), Some("New Year"));
        // Uncovered year: silently no holiday.
        assert!(!set.contains(date(2025, 1, 1)));
    }

    #[test]
    fn extended_returns_new_set() {
        let set = HolidaySet::build(source(), [2024]).unwrap();
        let wider = set.extended([2025]).unwrap();
        assert!(wider.covers(2024) && wider.covers(2025));
        assert!(wider.contains(date(2025, 1, 1)));
        assert_eq!(wider.years().collect::<Vec<_>>(), vec![2024, 2025]);
        // The original is untouched.
        assert!(!set.covers(2025));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn holidays_between_is_ordered_and_inclusive() {
        let set = HolidaySet::build(source(), 2024..=2025).unwrap();
        let range = DateRange::new(date(2024, 12, 25), date(2025, 1, 1)).unwrap();
        let found: Vec<_> = set.holidays_between(&range).collect();
        assert_eq!(
            found,
            vec![(date(2024, 12, 25), "Christmas"), (date(2025, 1, 1), "New Year")]
        );
        assert!(set.covers_range(&range));
    }

    #[derive(Debug)]
    struct Overlapping;

    impl HolidaySource for Overlapping {
        fn name(&self) -> &str {
            "Overlapping"
        }

        fn year_holidays(&self, year: i32) -> Result<Vec<Holiday>> {
            let d = Date::from_ymd(year, 5, 1)?;
            Ok(vec![
                Holiday::new(d, "Labour Day"),
                Holiday::new(d, "Spring Fair"),
                Holiday::new(d, "Labour Day"),
            ])
        }
    }

    #[test]
    fn same_date_names_are_joined_once() {
        let set = HolidaySet::build(Arc::new(Overlapping), [2024]).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(date(2024, 5, 1)), Some("Labour Day; Spring Fair"));
    }

    #[test]
    fn acts_as_calendar() {
        let set = HolidaySet::build(source(), [2024]).unwrap();
        assert_eq!(set.name(), "Test");
        // 2024-12-25 is a Wednesday.
        assert!(!set.is_business_day(date(2024, 12, 25)));
        assert!(set.is_business_day(date(2024, 12, 27)));
        assert!(!set.is_business_day(date(2024, 12, 28)));
    }
}
