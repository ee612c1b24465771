//! Pure conversion functions: TOML config structs and CLI overrides -> typed settings.

use anyhow::{Context, Result, bail};

use renqing_lunar::ReminderPolicy;

use crate::config::{OutputToml, ReminderToml, UpcomingToml};
use crate::output::OutputFormat;

/// Parses an output format name into the corresponding enum variant.
pub fn parse_output_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Resolves the output format, preferring the command-line value.
pub fn resolve_output_format(output: &OutputToml, flag: Option<&str>) -> Result<OutputFormat> {
    parse_output_format(flag.unwrap_or(&output.format))
}

/// Builds a [`ReminderPolicy`] from the TOML reminder configuration.
///
/// A `--lead-days` value takes precedence over the file.
pub fn build_reminder_policy(reminder: &ReminderToml, flag: Option<u32>) -> Result<ReminderPolicy> {
    let lead_days = flag.unwrap_or(reminder.lead_days);
    ReminderPolicy::new(lead_days).context("invalid reminder configuration")
}

/// Resolves the upcoming-festival window, preferring the command-line value.
pub fn resolve_window_days(upcoming: &UpcomingToml, flag: Option<u32>) -> u32 {
    flag.unwrap_or(upcoming.window_days)
}
