//! Subcommand runners: compute through `Workcal`, then print text or JSON.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::{BusinessArgs, HolidaysArgs, PeriodArgs, RangeArgs, WeekArgs};
use workcal::{BusinessSpan, Date, Holiday, Language, Weekday, Workcal};

/// How results are printed.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

impl Output {
    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<()> {
        if self.json {
            let s = serde_json::to_string_pretty(value).context("failed to encode JSON")?;
            println!("{s}");
        } else {
            print!("{}", text());
        }
        Ok(())
    }
}

fn today() -> Result<Date> {
    Date::today().context("cannot determine today's date")
}

fn weekday_name(wc: &Workcal, day: Weekday) -> &'static str {
    match wc.settings().language {
        Language::Lithuanian => day.lt_name(),
        Language::English => day.name(),
    }
}

fn holiday_lines(holidays: &[Holiday]) -> String {
    holidays
        .iter()
        .map(|h| format!("  - {}  {}\n", h.date, h.name))
        .collect()
}

pub fn range(wc: &Workcal, args: RangeArgs, out: Output) -> Result<()> {
    let start = args.start.map_or_else(today, Ok)?;
    let end = args.end.map_or_else(today, Ok)?;
    let analysis = wc.analyze_range(start, end)?;
    out.emit(&analysis, || {
        let mut s = format!(
            "Calendar days: {}\nWork days: {}\nHolidays: {}\n",
            analysis.calendar_days,
            analysis.work_days,
            analysis.holidays.len()
        );
        s.push_str(&holiday_lines(&analysis.holidays));
        s
    })
}

pub fn week(wc: &Workcal, args: WeekArgs, out: Output) -> Result<()> {
    let year = match args.year {
        Some(y) => y,
        None => today()?.year(),
    };
    let week = wc.week_dates(year, args.week)?;
    out.emit(&week, || {
        let mut s = format!("ISO week {} of {}:\n", week.week, week.year);
        for d in week.days {
            s.push_str(&format!("  - {d} ({})\n", weekday_name(wc, d.weekday())));
        }
        s
    })
}

#[derive(Debug, PartialEq, Serialize)]
struct PeriodEnd {
    start: Date,
    end: Date,
    #[serde(skip_serializing_if = "Option::is_none")]
    counted_from: Option<Date>,
}

impl PeriodEnd {
    fn calendar(start: Date, end: Date) -> Self {
        Self {
            start,
            end,
            counted_from: None,
        }
    }

    /// `counted_from` is set only when business day 1 is not `start` itself.
    fn business(span: BusinessSpan) -> Self {
        Self {
            start: span.start,
            end: span.end,
            counted_from: (span.first != span.start).then_some(span.first),
        }
    }

    fn text(&self, heading: &str) -> String {
        let mut s = format!("{heading}: {}\n", self.end);
        if let Some(first) = self.counted_from {
            s.push_str(&format!(
                "Note: {} is not a business day; counting starts from {first}.\n",
                self.start
            ));
        }
        s
    }
}

pub fn period(wc: &Workcal, args: PeriodArgs, out: Output) -> Result<()> {
    let start = args.start.map_or_else(today, Ok)?;
    let end = wc.project_calendar_period(start, args.unit, args.amount)?;
    let result = PeriodEnd::calendar(start, end);
    out.emit(&result, || result.text("End date"))
}

pub fn business(wc: &Workcal, args: BusinessArgs, out: Output) -> Result<()> {
    let start = args.start.map_or_else(today, Ok)?;
    let result = PeriodEnd::business(wc.business_span(start, args.days)?);
    out.emit(&result, || result.text("End date (business days)"))
}

pub fn holidays(wc: &Workcal, args: HolidaysArgs, out: Output) -> Result<()> {
    let year = match args.year {
        Some(y) => y,
        None => today()?.year(),
    };
    let holidays = wc.year_holidays(year)?;
    out.emit(&holidays, || {
        let mut s = format!("{} public holidays in {year}: {}\n", wc.source().name(), holidays.len());
        s.push_str(&holiday_lines(&holidays));
        s
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn business_start_on_workday_has_no_note() {
        let result = PeriodEnd::business(BusinessSpan {
            start: date(2024, 12, 23),
            first: date(2024, 12, 23),
            end: date(2025, 1, 2),
        });
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "start": "2024-12-23", "end": "2025-01-02" })
        );
        assert_eq!(result.text("End date (business days)"), "End date (business days): 2025-01-02\n");
    }

    #[test]
    fn business_start_on_holiday_reports_counted_from() {
        let wc = Workcal::new(Default::default()).unwrap();
        let result = PeriodEnd::business(wc.business_span(date(2024, 12, 24), 2).unwrap());
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "start": "2024-12-24", "end": "2024-12-30", "counted_from": "2024-12-27" })
        );
        assert!(result
            .text("End date (business days)")
            .ends_with("Note: 2024-12-24 is not a business day; counting starts from 2024-12-27.\n"));
    }

    #[test]
    fn calendar_period_shape() {
        let result = PeriodEnd::calendar(date(2024, 1, 31), date(2024, 2, 29));
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "start": "2024-01-31", "end": "2024-02-29" })
        );
    }
}
