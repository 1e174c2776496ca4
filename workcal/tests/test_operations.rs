//! Integration tests for the four user-facing calculations.

use std::sync::Arc;

use proptest::prelude::*;

use workcal::{
    Date, DurationSpec, Error, HolidaySource, Language, Settings, TimeUnit, Weekday, Workcal,
};
use wc_calendars::BespokeHolidays;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn wc() -> Workcal {
    Workcal::new(Settings::default()).unwrap()
}

// ─── analyzeRange ─────────────────────────────────────────────────────────────

#[test]
fn single_plain_weekday() {
    let a = wc().analyze_range(date(2024, 6, 12), date(2024, 6, 12)).unwrap();
    assert_eq!(a.calendar_days, 1);
    assert_eq!(a.work_days, 1);
    assert!(a.holidays.is_empty());
}

#[test]
fn new_years_day_is_listed_with_its_name() {
    let a = wc().analyze_range(date(2023, 12, 20), date(2024, 1, 10)).unwrap();
    let ny = a
        .holidays
        .iter()
        .find(|h| h.date == date(2024, 1, 1))
        .expect("New Year's Day missing");
    assert_eq!(ny.name, "Naujųjų metų diena");

    let en = Workcal::new(Settings {
        language: Language::English,
        ..Settings::default()
    })
    .unwrap();
    let a = en.analyze_range(date(2024, 1, 1), date(2024, 1, 1)).unwrap();
    assert_eq!(a.holidays[0].name, "New Year's Day");
    assert_eq!(a.work_days, 0);
}

#[test]
fn full_year_2024() {
    let a = wc().analyze_range(date(2024, 1, 1), date(2024, 12, 31)).unwrap();
    assert_eq!(a.calendar_days, 366);
    // 262 weekdays minus the 11 holidays that fall Monday–Friday in 2024.
    assert_eq!(a.work_days, 251);
    assert_eq!(a.holidays.len(), 16);
}

#[test]
fn range_across_years_covers_both() {
    let a = wc().analyze_range(date(2024, 12, 30), date(2025, 1, 3)).unwrap();
    assert_eq!(a.calendar_days, 5);
    // Mon 30, Tue 31, Thu 2, Fri 3.
    assert_eq!(a.work_days, 4);
    assert_eq!(a.holidays.len(), 1);
}

#[test]
fn reversed_range_fails() {
    assert!(matches!(
        wc().analyze_range(date(2024, 1, 2), date(2024, 1, 1)),
        Err(Error::InvalidRange { .. })
    ));
}

// ─── weekDates ────────────────────────────────────────────────────────────────

#[test]
fn week_dates_of_week_one() {
    let w = wc().week_dates(2024, 1).unwrap();
    assert_eq!(w.days[0], date(2024, 1, 1));
    assert_eq!(w.days[6], date(2024, 1, 7));
}

#[test]
fn invalid_weeks_fail() {
    let wc = wc();
    for (year, week) in [(2024, 53), (2024, 0), (2024, 54), (2024, -1)] {
        assert_eq!(
            wc.week_dates(year, week),
            Err(Error::InvalidWeekNumber { year, week })
        );
    }
}

// ─── projectCalendarPeriod ────────────────────────────────────────────────────

#[test]
fn calendar_period_clamps() {
    let wc = wc();
    assert_eq!(
        wc.project_calendar_period(date(2024, 1, 31), TimeUnit::Months, 1).unwrap(),
        date(2024, 2, 29)
    );
    assert_eq!(
        wc.project_calendar_period(date(2023, 2, 28), TimeUnit::Years, 1).unwrap(),
        date(2024, 2, 28)
    );
    assert_eq!(
        wc.project_calendar_period(date(2024, 5, 6), TimeUnit::Weeks, 0).unwrap(),
        date(2024, 5, 6)
    );
}

// ─── projectBusinessPeriod ────────────────────────────────────────────────────

#[test]
fn business_period_over_easter() {
    // Thu 2024-03-28, Fri 29, (weekend, Easter Monday 1 Apr), Tue 2.
    assert_eq!(
        wc().project_business_period(date(2024, 3, 28), 3).unwrap(),
        date(2024, 4, 2)
    );
}

#[test]
fn business_period_rejects_zero_and_negative() {
    let wc = wc();
    for n in [0, -5] {
        assert!(matches!(
            wc.project_business_period(date(2024, 3, 28), n),
            Err(Error::InvalidDuration(_))
        ));
    }
}

#[test]
fn business_period_beyond_lookahead() {
    let short = Workcal::new(Settings {
        lookahead_years: 1,
        ..Settings::default()
    })
    .unwrap();
    let start = date(2024, 1, 2);
    // Two years of business days: the walk leaves the pre-built year.
    let far = short.project_business_period(start, 520).unwrap();
    assert_eq!(far, wc().project_business_period(start, 520).unwrap());
    assert!(far.year() >= 2026);
}

#[test]
fn project_with_duration_spec() {
    let wc = wc();
    let start = date(2024, 12, 23);
    assert_eq!(wc.project(start, "5bd".parse().unwrap()).unwrap(), date(2025, 1, 2));
    assert_eq!(wc.project(start, DurationSpec::Months(2)).unwrap(), date(2025, 2, 23));
}

// ─── Swappable holiday source ─────────────────────────────────────────────────

#[test]
fn custom_source() {
    let source: Arc<dyn HolidaySource> = Arc::new(
        BespokeHolidays::new("Office").with_holiday(date(2024, 6, 12), "Founders' Day"),
    );
    let wc = Workcal::with_source(source, Settings::default()).unwrap();
    let a = wc.analyze_range(date(2024, 6, 10), date(2024, 6, 14)).unwrap();
    assert_eq!(a.work_days, 4);
    assert_eq!(a.holidays[0].name, "Founders' Day");
    assert_eq!(wc.project_business_period(date(2024, 6, 12), 1).unwrap(), date(2024, 6, 13));
}

// ─── Properties ───────────────────────────────────────────────────────────────

fn any_date() -> impl Strategy<Value = Date> {
    (date(2000, 1, 1).serial()..date(2040, 12, 31).serial())
        .prop_map(|s| Date::from_serial(s).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn workdays_never_exceed_calendar_days(start in any_date(), len in 0i32..400) {
        let end = start + len;
        let a = wc().analyze_range(start, end).unwrap();
        prop_assert_eq!(a.calendar_days as i32, len + 1);
        prop_assert!(a.work_days <= a.calendar_days);
        prop_assert!(a.holidays.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn first_business_day_is_on_or_after_start(start in any_date()) {
        let wc = wc();
        let first = wc.project_business_period(start, 1).unwrap();
        prop_assert!(first >= start);
        prop_assert!(!matches!(first.weekday(), Weekday::Saturday | Weekday::Sunday));
        let a = wc.analyze_range(start, first).unwrap();
        prop_assert_eq!(a.work_days, 1);
    }

    #[test]
    fn business_projection_is_monotonic(start in any_date(), n1 in 1i64..60, extra in 1i64..60) {
        let wc = wc();
        let a = wc.project_business_period(start, n1).unwrap();
        let b = wc.project_business_period(start, n1 + extra).unwrap();
        prop_assert!(a < b);
        let counted = wc.analyze_range(start, b).unwrap().work_days as i64;
        prop_assert_eq!(counted, n1 + extra);
    }

    #[test]
    fn week_dates_shape(year in 1990i32..2100, week in 1i64..=53) {
        match wc().week_dates(year, week) {
            Ok(w) => {
                prop_assert_eq!(w.days[0].weekday(), Weekday::Monday);
                prop_assert_eq!(w.days[6].weekday(), Weekday::Sunday);
                prop_assert_eq!(w.days[6] - w.days[0], 6);
            }
            Err(e) => {
                prop_assert_eq!(week, 53);
                prop_assert_eq!(e, Error::InvalidWeekNumber { year, week });
            }
        }
    }
}
