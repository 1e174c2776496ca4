use std::path::PathBuf;

use clap::{Parser, Subcommand};

use workcal::{Date, Language, TimeUnit};

/// Workday, holiday and period-end calculators on the Lithuanian calendar.
#[derive(Parser)]
#[command(
    name = "workcal",
    version,
    about = "Workday, holiday and period-end calculators (Lithuanian calendar)"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML settings file (optional).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Language of holiday names, overriding the settings file.
    #[arg(long, global = true)]
    pub lang: Option<Language>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Calculation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available calculations.
#[derive(Subcommand)]
pub enum Command {
    /// Calendar days, workdays and holidays between two dates (inclusive).
    Range(RangeArgs),
    /// The seven dates of an ISO week.
    Week(WeekArgs),
    /// End date of a period in days, weeks, months or years.
    Period(PeriodArgs),
    /// End date of a period in business days.
    Business(BusinessArgs),
    /// All public holidays of a year.
    Holidays(HolidaysArgs),
}

/// Arguments for the `range` subcommand.
#[derive(clap::Args)]
pub struct RangeArgs {
    /// Start date (YYYY-MM-DD), default today.
    #[arg(short, long)]
    pub start: Option<Date>,

    /// End date (YYYY-MM-DD), default today.
    #[arg(short, long)]
    pub end: Option<Date>,
}

/// Arguments for the `week` subcommand.
#[derive(clap::Args)]
pub struct WeekArgs {
    /// ISO year, default the current year.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// ISO week number (1–53); other values are reported as missing weeks.
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub week: i64,
}

/// Arguments for the `period` subcommand.
#[derive(clap::Args)]
pub struct PeriodArgs {
    /// Start date (YYYY-MM-DD), default today.
    #[arg(short, long)]
    pub start: Option<Date>,

    /// Unit: days, weeks, months or years.
    #[arg(short, long, default_value = "days")]
    pub unit: TimeUnit,

    /// Number of units.
    #[arg(short, long, default_value_t = 0)]
    pub amount: u32,
}

/// Arguments for the `business` subcommand.
#[derive(clap::Args)]
pub struct BusinessArgs {
    /// Start date (YYYY-MM-DD), default today.
    #[arg(short, long)]
    pub start: Option<Date>,

    /// Number of business days (>= 1), the first business day counting as 1.
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub days: i64,
}

/// Arguments for the `holidays` subcommand.
#[derive(clap::Args)]
pub struct HolidaysArgs {
    /// Year, default the current year.
    #[arg(short, long)]
    pub year: Option<i32>,
}
