use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::{debug, info};

/// Configuration file read from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "renqing.toml";

/// Top-level Renqing configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenqingConfig {
    /// Birthday reminder settings.
    #[serde(default)]
    pub reminder: ReminderToml,

    /// Upcoming festival settings.
    #[serde(default)]
    pub upcoming: UpcomingToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

/// `[reminder]` section: birthday reminder lead time.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReminderToml {
    #[serde(default = "default_lead_days")]
    pub lead_days: u32,
}

impl Default for ReminderToml {
    fn default() -> Self {
        Self {
            lead_days: default_lead_days(),
        }
    }
}

fn default_lead_days() -> u32 {
    3
}

/// `[upcoming]` section: festival look-ahead window.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpcomingToml {
    #[serde(default = "default_window_days")]
    pub window_days: u32,
}

impl Default for UpcomingToml {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
        }
    }
}

fn default_window_days() -> u32 {
    30
}

/// `[output]` section: default output format.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

/// Loads the configuration.
///
/// An explicit path must exist. Without one, `fallback` is read when it is a
/// file; otherwise every setting takes its default.
pub fn load(explicit: Option<&Path>, fallback: &Path) -> Result<RenqingConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                bail!("config file not found: {}", path.display());
            }
            path
        }
        None if fallback.is_file() => fallback,
        None => {
            debug!("no config file, using defaults");
            return Ok(RenqingConfig::default());
        }
    };

    info!(path = %path.display(), "reading config");
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))
}
