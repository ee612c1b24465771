//! Reminder command: `next`.

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, info_span};

use renqing_lunar::{Birthday, next_reminder};

use crate::cli::NextArgs;
use crate::config::RenqingConfig;
use crate::convert;
use crate::output::{OutputFormat, ReminderView, render};

/// Finds the next birthday and when its reminder fires.
pub fn next(args: &NextArgs, config: &RenqingConfig, format: OutputFormat) -> Result<String> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let policy = convert::build_reminder_policy(&config.reminder, args.lead_days)?;
    let _cmd = info_span!("next", %today, lead_days = policy.lead_days()).entered();

    let birthday = if args.solar {
        Birthday::new_solar(args.month, args.day)
    } else {
        Birthday::new_lunar(args.month, args.day)
    }
    .context("invalid birthday")?;

    let reminder = next_reminder(birthday, today, &policy)?;
    match reminder {
        Some(r) => info!(occurrence = %r.occurrence, trigger = %r.trigger, "reminder scheduled"),
        None => info!("no occurrence in range"),
    }
    render(
        &ReminderView {
            birthday,
            lead_days: policy.lead_days(),
            reminder,
        },
        format,
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn args(month: u8, day: u8, solar: bool, today: (i32, u32, u32)) -> NextArgs {
        NextArgs {
            month,
            day,
            solar,
            today: NaiveDate::from_ymd_opt(today.0, today.1, today.2),
            lead_days: None,
        }
    }

    #[test]
    fn lunar_birthday_text() {
        let out = next(
            &args(8, 15, false, (2025, 9, 1)),
            &RenqingConfig::default(),
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(out, "2025-10-06  in 35 days, remind on 2025-10-03");
    }

    #[test]
    fn solar_birthday_tomorrow() {
        let out = next(
            &args(6, 1, true, (2025, 5, 31)),
            &RenqingConfig::default(),
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(out, "2025-06-01  tomorrow, remind on 2025-05-31");
    }

    #[test]
    fn lead_days_flag_and_json() {
        let mut request = args(12, 20, false, (2025, 1, 10));
        request.lead_days = Some(5);
        let json = next(&request, &RenqingConfig::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["birthday"]["calendar"], "lunar");
        assert_eq!(value["lead_days"], 5);
        assert_eq!(value["reminder"]["occurrence"], "2025-01-19");
        assert_eq!(value["reminder"]["trigger"], "2025-01-14");
        assert_eq!(value["reminder"]["days_until"], 9);
    }

    #[test]
    fn invalid_birthday_reported() {
        let err = next(
            &args(2, 30, true, (2025, 1, 1)),
            &RenqingConfig::default(),
            OutputFormat::Text,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("invalid birthday"), "{err:#}");
    }

    #[test]
    fn lead_days_above_a_year_rejected() {
        let mut request = args(1, 1, false, (2025, 1, 1));
        request.lead_days = Some(366);
        assert!(next(&request, &RenqingConfig::default(), OutputFormat::Text).is_err());
    }
}
