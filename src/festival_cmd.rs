//! Festival commands: `festivals` and `upcoming`.

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, info_span};

use renqing_lunar::{festivals_in_month, upcoming_festivals};

use crate::cli::{FestivalsArgs, UpcomingArgs};
use crate::config::RenqingConfig;
use crate::convert;
use crate::output::{FestivalList, OutputFormat, render};

/// Lists the festivals of a Gregorian month.
pub fn festivals(args: &FestivalsArgs, format: OutputFormat) -> Result<String> {
    let _cmd = info_span!("festivals", year = args.year, month = args.month).entered();
    let festivals = festivals_in_month(args.year, args.month)
        .with_context(|| format!("cannot list festivals for {}-{:02}", args.year, args.month))?;
    info!(n = festivals.len(), "festivals listed");
    render(&FestivalList { festivals }, format)
}

/// Lists the festivals from today through the configured window.
pub fn upcoming(args: &UpcomingArgs, config: &RenqingConfig, format: OutputFormat) -> Result<String> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let window_days = convert::resolve_window_days(&config.upcoming, args.days);
    let _cmd = info_span!("upcoming", %today, window_days).entered();
    let festivals = upcoming_festivals(today, window_days);
    info!(n = festivals.len(), "upcoming festivals listed");
    render(&FestivalList { festivals }, format)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn february_2024() {
        let args = FestivalsArgs {
            year: 2024,
            month: 2,
        };
        assert_eq!(
            festivals(&args, OutputFormat::Text).unwrap(),
            "2024-02-02  腊月廿三  小年\n2024-02-10  正月初一  春节\n2024-02-24  正月十五  元宵节"
        );
    }

    #[test]
    fn invalid_month_reported() {
        let args = FestivalsArgs {
            year: 2024,
            month: 13,
        };
        let err = festivals(&args, OutputFormat::Text).unwrap_err();
        assert!(format!("{err:#}").contains("invalid month: 13"), "{err:#}");
    }

    #[test]
    fn upcoming_uses_config_window() {
        let mut config = RenqingConfig::default();
        config.upcoming.window_days = 60;
        let args = UpcomingArgs {
            today: NaiveDate::from_ymd_opt(2024, 9, 1),
            days: None,
        };
        let json = upcoming(&args, &config, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let names: Vec<&str> = value["festivals"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["中秋节", "重阳节"]);
    }

    #[test]
    fn upcoming_flag_overrides_window() {
        let args = UpcomingArgs {
            today: NaiveDate::from_ymd_opt(2024, 9, 1),
            days: Some(10),
        };
        assert_eq!(
            upcoming(&args, &RenqingConfig::default(), OutputFormat::Text).unwrap(),
            "no festivals"
        );
    }
}
