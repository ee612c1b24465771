//! Date commands: `lunar`, `solar` and `year`.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use renqing_lunar::{
    LunarDate, LunarYear, festival_name, month_spans, sexagenary_name,
    solar_to_lunar, zodiac,
};

use crate::cli::{LunarArgs, SolarArgs, YearArgs};
use crate::output::{DateView, OutputFormat, YearView, render};

/// Converts a Gregorian date to its luni-solar reading.
pub fn lunar(args: &LunarArgs, format: OutputFormat) -> Result<String> {
    let _cmd = info_span!("lunar", date = %args.date).entered();
    let lunar = solar_to_lunar(args.date)
        .with_context(|| format!("cannot convert {}", args.date))?;
    info!(lunar = %lunar, "converted");
    render(&DateView::new(args.date, lunar, festival_name(args.date)), format)
}

/// Converts a luni-solar date to its Gregorian date.
pub fn solar(args: &SolarArgs, format: OutputFormat) -> Result<String> {
    let _cmd = info_span!("solar", year = args.year, month = args.month, day = args.day).entered();
    let lunar = LunarDate::new(args.year, args.month, args.day, args.leap).with_context(|| {
        format!(
            "cannot convert luni-solar {}-{}-{}{}",
            args.year,
            args.month,
            args.day,
            if args.leap { " (leap)" } else { "" }
        )
    })?;
    let date = lunar.to_solar();
    info!(%date, "converted");
    render(&DateView::new(date, lunar, festival_name(date)), format)
}

/// Lays out the months of a luni-solar year.
pub fn year(args: &YearArgs, format: OutputFormat) -> Result<String> {
    let _cmd = info_span!("year", year = args.year).entered();
    let view = year_view(args.year)?;
    render(&view, format)
}

fn year_view(year: i32) -> Result<YearView> {
    let info = LunarYear::new(year).with_context(|| format!("cannot lay out year {year}"))?;
    let months = month_spans(year).with_context(|| format!("cannot lay out year {year}"))?;
    Ok(YearView {
        year,
        sexagenary: sexagenary_name(year),
        zodiac: zodiac(year),
        leap_month: info.leap_month(),
        total_days: info.total_days(),
        months,
    })
}
