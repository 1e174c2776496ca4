//! Western Easter date (Gregorian computus).

use wc_core::errors::Result;
use wc_time::Date;

/// Easter Sunday of `year` on the Gregorian calendar.
///
/// Uses Oudin's algorithm, valid for every Gregorian year.
pub fn easter_sunday(year: i32) -> Result<Date> {
    let y = year;
    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;
    Date::from_ymd(year, month as u8, day as u8)
}

/// Easter Monday of `year`.
pub fn easter_monday(year: i32) -> Result<Date> {
    easter_sunday(year)?.add_days(1)
}
