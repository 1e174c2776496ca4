//! Integration tests for the Lithuanian holiday table, `HolidaySet` and the
//! `Calendar` trait.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use proptest::prelude::*;

use wc_calendars::{
    BespokeHolidays, Calendar, HolidaySet, HolidaySource, Language, Lithuania, WeekendsOnly,
};
use wc_time::{Date, DateRange};

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn lithuania() -> Arc<dyn HolidaySource> {
    Arc::new(Lithuania::default())
}

/// Collect all non-weekend holidays in the inclusive range `[from, to]`.
fn weekday_holidays(cal: &dyn Calendar, from: Date, to: Date) -> Vec<Date> {
    DateRange::new(from, to)
        .unwrap()
        .iter()
        .filter(|&d| cal.is_holiday(d) && !cal.is_weekend(d))
        .collect()
}

/// Assert the calculated weekday holidays match `expected` exactly.
fn check_holidays(cal: &dyn Calendar, from: Date, to: Date, expected: &[Date]) {
    let calculated: HashSet<_> = weekday_holidays(cal, from, to).into_iter().collect();
    let expected: HashSet<_> = expected.iter().copied().collect();
    for d in calculated.difference(&expected) {
        panic!("{}: {d} calculated as holiday but not expected ({})", cal.name(), d.weekday());
    }
    for d in expected.difference(&calculated) {
        panic!("{}: {d} expected as holiday but not found ({})", cal.name(), d.weekday());
    }
}

// ─── Lithuania ────────────────────────────────────────────────────────────────

#[test]
fn lithuania_weekday_holidays_2025_2026() {
    let set = HolidaySet::build(lithuania(), 2025..=2026).unwrap();
    let expected = [
        date(2025, 1, 1),
        date(2025, 3, 11),
        date(2025, 4, 21),
        date(2025, 5, 1),
        date(2025, 6, 24),
        date(2025, 8, 15),
        date(2025, 12, 24),
        date(2025, 12, 25),
        date(2025, 12, 26),
        date(2026, 1, 1),
        date(2026, 2, 16),
        date(2026, 3, 11),
        date(2026, 4, 6),
        date(2026, 5, 1),
        date(2026, 6, 24),
        date(2026, 7, 6),
        date(2026, 11, 2),
        date(2026, 12, 24),
        date(2026, 12, 25),
    ];
    check_holidays(&set, date(2025, 1, 1), date(2026, 12, 31), &expected);
}

#[test]
fn english_names_cover_the_same_dates() {
    let lt = HolidaySet::build(lithuania(), [2024]).unwrap();
    let en = HolidaySet::build(Arc::new(Lithuania::new(Language::English)), [2024]).unwrap();
    let lt_dates: Vec<Date> = lt.iter().map(|(d, _)| d).collect();
    let en_dates: Vec<Date> = en.iter().map(|(d, _)| d).collect();
    assert_eq!(lt_dates, en_dates);
    assert_eq!(en.get(date(2024, 3, 11)), Some("Day of Restoration of Independence of Lithuania"));
    assert_eq!(lt.get(date(2024, 12, 24)), Some("Kūčių diena"));
}

#[test]
fn easter_monday_moves_with_easter() {
    let set = HolidaySet::build(lithuania(), [2023, 2024, 2025]).unwrap();
    assert_eq!(set.get(date(2023, 4, 10)), Some("Antroji šv. Velykų diena"));
    assert_eq!(set.get(date(2024, 4, 1)), Some("Antroji šv. Velykų diena"));
    assert_eq!(set.get(date(2025, 4, 21)), Some("Antroji šv. Velykų diena"));
    assert!(!set.is_business_day(date(2025, 4, 21)));
    assert!(set.is_business_day(date(2025, 4, 22)));
}

// ─── HolidaySet ───────────────────────────────────────────────────────────────

#[test]
fn extension_is_a_pure_rebuild() {
    let base = HolidaySet::build(lithuania(), [2024]).unwrap();
    let before = base.len();
    let wider = base.extended([2025, 2026]).unwrap();

    assert_eq!(base.len(), before);
    assert!(!base.contains(date(2025, 1, 1)));
    assert!(wider.contains(date(2025, 1, 1)));
    assert!(wider.contains(date(2024, 1, 1)));
    assert_eq!(wider.years().collect::<Vec<_>>(), vec![2024, 2025, 2026]);

    let rebuilt = HolidaySet::build(lithuania(), 2024..=2026).unwrap();
    assert_eq!(wider.iter().collect::<Vec<_>>(), rebuilt.iter().collect::<Vec<_>>());
}

#[test]
fn extending_with_covered_years_changes_nothing() {
    let base = HolidaySet::build(lithuania(), [2024]).unwrap();
    let same = base.extended([2024]).unwrap();
    assert_eq!(base.iter().collect::<Vec<_>>(), same.iter().collect::<Vec<_>>());
}

#[test]
fn every_date_appears_once_per_covered_year() {
    let set = HolidaySet::build(lithuania(), 1990..=2030).unwrap();
    for year in 1990..=2030 {
        let from_source = Lithuania::default().year_holidays(year).unwrap();
        let distinct: HashSet<Date> = from_source.iter().map(|h| h.date).collect();
        let in_set = set.iter().filter(|(d, _)| d.year() == year).count();
        assert_eq!(in_set, distinct.len(), "year {year}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn extending_equals_building_the_union(
        first in prop::collection::btree_set(1985i32..2100, 0..6),
        second in prop::collection::btree_set(1985i32..2100, 0..6),
    ) {
        let extended = HolidaySet::build(lithuania(), first.iter().copied())
            .unwrap()
            .extended(second.iter().copied())
            .unwrap();
        let union: BTreeSet<i32> = first.union(&second).copied().collect();
        let rebuilt = HolidaySet::build(lithuania(), union.iter().copied()).unwrap();

        prop_assert_eq!(extended.years().collect::<Vec<_>>(), union.into_iter().collect::<Vec<_>>());
        prop_assert_eq!(extended.iter().collect::<Vec<_>>(), rebuilt.iter().collect::<Vec<_>>());
    }
}

// ─── Swappable sources ────────────────────────────────────────────────────────

#[test]
fn bespoke_source_drives_calendar() {
    let source = BespokeHolidays::new("Office").with_holiday(date(2024, 7, 12), "Summer shutdown");
    let set = HolidaySet::build(Arc::new(source), [2024]).unwrap();
    assert_eq!(set.name(), "Office");
    assert!(!set.is_business_day(date(2024, 7, 12)));
    assert_eq!(set.next_business_day(date(2024, 7, 12)).unwrap(), date(2024, 7, 15));
    assert_eq!(
        WeekendsOnly.next_business_day(date(2024, 7, 12)).unwrap(),
        date(2024, 7, 12)
    );
}
