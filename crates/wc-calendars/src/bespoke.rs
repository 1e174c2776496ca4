//! Bespoke holiday source: holidays added by hand at run time.

use std::collections::BTreeMap;

use crate::source::{Holiday, HolidaySource};
use wc_core::errors::Result;
use wc_time::Date;

/// A holiday source whose holidays are added manually.
///
/// Useful for company shutdown days, or as a stand-in table in tests.
#[derive(Debug, Clone)]
pub struct BespokeHolidays {
    name: String,
    holidays: BTreeMap<Date, String>,
}

impl BespokeHolidays {
    /// Create an empty source with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: BTreeMap::new(),
        }
    }

    /// Add (or rename) a holiday.
    pub fn add_holiday(&mut self, date: Date, name: impl Into<String>) {
        self.holidays.insert(date, name.into());
    }

    /// Builder form of [`add_holiday`](Self::add_holiday).
    pub fn with_holiday(mut self, date: Date, name: impl Into<String>) -> Self {
        self.add_holiday(date, name);
        self
    }
}

impl HolidaySource for BespokeHolidays {
    fn name(&self) -> &str {
        &self.name
    }

    fn year_holidays(&self, year: i32) -> Result<Vec<Holiday>> {
        Ok(self
            .holidays
            .iter()
            .filter(|(date, _)| date.year() == year)
            .map(|(&date, name)| Holiday::new(date, name.clone()))
            .collect())
    }
}
