//! Lithuania public holidays.
//!
//! Weekends and the following holidays are observed (years from 1990):
//! * New Year's Day (Jan 1)
//! * Day of Restoration of the State of Lithuania (Feb 16)
//! * Day of Restoration of Independence of Lithuania (Mar 11)
//! * Easter Sunday and Easter Monday
//! * International Workers' Day (May 1)
//! * Mother's Day (first Sunday of May)
//! * Father's Day (first Sunday of June)
//! * Day of Dew and Saint John (Jun 24, since 2003)
//! * Statehood Day (Jul 6, since 1991)
//! * Assumption Day (Aug 15)
//! * All Saints' Day (Nov 1)
//! * All Souls' Day (Nov 2, since 2020)
//! * Christmas Eve, Christmas Day and the Second Day of Christmas (Dec 24–26)

use crate::easter::easter_sunday;
use crate::language::Language;
use crate::source::{Holiday, HolidaySource};
use wc_core::errors::Result;
use wc_time::{Date, Month, Weekday};

/// How a holiday's date is derived from the year.
#[derive(Debug, Clone, Copy)]
enum Rule {
    /// Same month and day every year.
    Fixed(Month, u8),
    /// Offset in days from Easter Sunday.
    Easter(i64),
    /// First Sunday of the month.
    FirstSunday(Month),
}

#[derive(Debug)]
struct HolidayRule {
    rule: Rule,
    since: i32,
    lt: &'static str,
    en: &'static str,
}

const RULES: &[HolidayRule] = &[
    HolidayRule {
        rule: Rule::Fixed(Month::January, 1),
        since: Lithuania::FIRST_YEAR,
        lt: "Naujųjų metų diena",
        en: "New Year's Day",
    },
    HolidayRule {
        rule: Rule::Fixed(Month::February, 16),
        since: Lithuania::FIRST_YEAR,
        lt: "Lietuvos valstybės atkūrimo diena",
        en: "Day of Restoration of the State of Lithuania",
    },
    HolidayRule {
        rule: Rule::Fixed(Month::March, 11),
        since: Lithuania::FIRST_YEAR,
        lt: "Lietuvos nepriklausomybės atkūrimo diena",
        en: "Day of Restoration of Independence of Lithuania",
    },
    HolidayRule {
        rule: Rule::Easter(0),
        since: Lithuania::FIRST_YEAR,
        lt: "Šv. Velykos",
        en: "Easter Sunday",
    },
    HolidayRule {
        rule: Rule::Easter(1),
        since: Lithuania::FIRST_YEAR,
        lt: "Antroji šv. Velykų diena",
        en: "Easter Monday",
    },
    HolidayRule {
        rule: Rule::Fixed(Month::May, 1),
        since: Lithuania::FIRST_YEAR,
        lt: "Tarptautinė darbo diena",
        en: "International Workers' Day",
    },
    HolidayRule {
        rule: Rule::FirstSunday(Month::May),
        since: Lithuania::FIRST_YEAR,
        lt: "Motinos diena",
        en: "Mother's Day",
    },
    HolidayRule {
        rule: Rule::FirstSunday(Month::June),
        since: Lithuania::FIRST_YEAR,
        lt: "Tėvo diena",
        en: "Father's Day",
    },
    HolidayRule {
        rule: Rule::Fixed(Month::June, 24),
        since: 2003,
        lt: "Joninės, Rasos",
        en: "Day of Dew and Saint John",
    },
    HolidayRule {
        rule: Rule::Fixed(Month::July, 6),
        since: 1991,
        lt: "Valstybės (Lietuvos karaliaus Mindaugo karūnavimo) diena",
        en: "Statehood Day",
    },
    HolidayRule {
        rule: Rule::Fixed(Month::August, 15),
        since: Lithuania::FIRST_YEAR,
        lt: "Žolinė (Švč. Mergelės Marijos ėmimo į dangų diena)",
        en: "Assumption Day",
    },
    HolidayRule {
        rule: Rule::Fixed(Month::November, 1),
        since: Lithuania::FIRST_YEAR,
        lt: "Visų šventųjų diena",
        en: "All Saints' Day",
    },
    HolidayRule {
        rule: Rule::Fixed(Month::November, 2),
        since: 2020,
        lt: "Mirusiųjų atminimo (Vėlinių) diena",
        en: "All Souls' Day",
    },
    HolidayRule {
        rule: Rule::Fixed(Month::December, 24),
        since: Lithuania::FIRST_YEAR,
        lt: "Kūčių diena",
        en: "Christmas Eve",
    },
    HolidayRule {
        rule: Rule::Fixed(Month::December, 25),
        since: Lithuania::FIRST_YEAR,
        lt: "Šv. Kalėdų pirma diena",
        en: "Christmas Day",
    },
    HolidayRule {
        rule: Rule::Fixed(Month::December, 26),
        since: Lithuania::FIRST_YEAR,
        lt: "Šv. Kalėdų antra diena",
        en: "Second Day of Christmas",
    },
];

impl Rule {
    fn date(self, year: i32) -> Result<Date> {
        match self {
            Rule::Fixed(month, day) => Date::from_ymd(year, month.number(), day),
            Rule::Easter(offset) => easter_sunday(year)?.add_days(offset),
            Rule::FirstSunday(month) => Date::nth_weekday(1, Weekday::Sunday, year, month),
        }
    }
}

/// Lithuanian public holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lithuania {
    language: Language,
}

impl Lithuania {
    /// First year for which holidays are defined; earlier years have none.
    pub const FIRST_YEAR: i32 = 1990;

    /// Holiday names in the given language.
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Language of the reported names.
    pub fn language(&self) -> Language {
        self.language
    }
}

impl HolidaySource for Lithuania {
    fn name(&self) -> &str {
        "Lithuania"
    }

    fn year_holidays(&self, year: i32) -> Result<Vec<Holiday>> {
        RULES
            .iter()
            .filter(|r| year >= r.since)
            .map(|r| {
                let name = match self.language {
                    Language::Lithuanian => r.lt,
                    Language::English => r.en,
                };
                Ok(Holiday::new(r.rule.date(year)?, name))
            })
            .collect()
    }
}
