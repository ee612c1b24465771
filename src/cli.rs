use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Renqing luni-solar calendar tools.
#[derive(Parser)]
#[command(
    name = "renqing",
    version,
    about = "Luni-solar calendar conversions, festivals and birthday reminders"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (defaults to ./renqing.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format, "text" or "json". Overrides [output].format.
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date to its luni-solar date.
    Lunar(LunarArgs),
    /// Convert a luni-solar date to its Gregorian date.
    Solar(SolarArgs),
    /// List the festivals of a Gregorian month.
    Festivals(FestivalsArgs),
    /// List the festivals in the coming days.
    Upcoming(UpcomingArgs),
    /// Show the next occurrence of a birthday and when to be reminded.
    Next(NextArgs),
    /// Show the month layout of a luni-solar year.
    Year(YearArgs),
}

/// Arguments for the `lunar` subcommand.
#[derive(clap::Args)]
pub struct LunarArgs {
    /// Gregorian date (YYYY-MM-DD).
    pub date: NaiveDate,
}

/// Arguments for the `solar` subcommand.
#[derive(clap::Args)]
pub struct SolarArgs {
    /// Luni-solar year.
    pub year: i32,
    /// Luni-solar month (1-12).
    pub month: u8,
    /// Luni-solar day (1-30).
    pub day: u8,
    /// Use the leap month following `month`.
    #[arg(long)]
    pub leap: bool,
}

/// Arguments for the `festivals` subcommand.
#[derive(clap::Args)]
pub struct FestivalsArgs {
    /// Gregorian year.
    pub year: i32,
    /// Gregorian month (1-12).
    pub month: u8,
}

/// Arguments for the `upcoming` subcommand.
#[derive(clap::Args)]
pub struct UpcomingArgs {
    /// Reference date (defaults to the local date).
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Window length in days. Overrides [upcoming].window_days.
    #[arg(short, long)]
    pub days: Option<u32>,
}

/// Arguments for the `next` subcommand.
#[derive(clap::Args)]
pub struct NextArgs {
    /// Birthday month (1-12).
    pub month: u8,
    /// Birthday day.
    pub day: u8,

    /// Treat the birthday as a Gregorian date instead of a luni-solar one.
    #[arg(long)]
    pub solar: bool,

    /// Reference date (defaults to the local date).
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Days of advance notice. Overrides [reminder].lead_days.
    #[arg(short, long = "lead-days")]
    pub lead_days: Option<u32>,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Luni-solar year.
    pub year: i32,
}
