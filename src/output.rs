//! Command output views and their text / JSON rendering.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

use renqing_lunar::{Birthday, FestivalOccurrence, LunarDate, MonthSpan, Reminder, month_name};

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Plain-text rendering of a command result.
pub trait Render {
    fn render_text(&self) -> String;
}

/// Renders `value` in the requested format.
pub fn render<T: Serialize + Render>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(value.render_text()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).context("failed to serialize output")
        }
    }
}

/// A Gregorian date with its luni-solar reading.
#[derive(Debug, Serialize)]
pub struct DateView {
    pub date: NaiveDate,
    pub lunar: LunarDate,
    pub label: String,
    pub zodiac: &'static str,
    pub festival: Option<&'static str>,
}

impl DateView {
    pub fn new(date: NaiveDate, lunar: LunarDate, festival: Option<&'static str>) -> Self {
        Self {
            date,
            lunar,
            label: lunar.to_string(),
            zodiac: lunar.zodiac(),
            festival,
        }
    }
}

impl Render for DateView {
    fn render_text(&self) -> String {
        let line = format!("{}  {}  [{}]", self.date, self.label, self.zodiac);
        match self.festival {
            Some(name) => format!("{line}  {name}"),
            None => line,
        }
    }
}

/// Festivals found by a month or window scan.
#[derive(Debug, Serialize)]
pub struct FestivalList {
    pub festivals: Vec<FestivalOccurrence>,
}

impl Render for FestivalList {
    fn render_text(&self) -> String {
        if self.festivals.is_empty() {
            return "no festivals".to_string();
        }
        self.festivals
            .iter()
            .map(|f| format!("{}  {}  {}", f.date, f.lunar_label(), f.name))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The next birthday and its reminder, if one exists in the supported range.
#[derive(Debug, Serialize)]
pub struct ReminderView {
    pub birthday: Birthday,
    pub lead_days: u32,
    pub reminder: Option<Reminder>,
}

impl Render for ReminderView {
    fn render_text(&self) -> String {
        let Some(reminder) = self.reminder else {
            return "no upcoming occurrence within the supported range".to_string();
        };
        let when = match reminder.days_until {
            0 => "today".to_string(),
            1 => "tomorrow".to_string(),
            n => format!("in {n} days"),
        };
        format!(
            "{}  {when}, remind on {}",
            reminder.occurrence, reminder.trigger
        )
    }
}

/// A luni-solar year laid out on the Gregorian calendar.
#[derive(Debug, Serialize)]
pub struct YearView {
    pub year: i32,
    pub sexagenary: String,
    pub zodiac: &'static str,
    pub leap_month: Option<u8>,
    pub total_days: u16,
    pub months: Vec<MonthSpan>,
}

impl Render for YearView {
    fn render_text(&self) -> String {
        let leap = self
            .leap_month
            .and_then(|m| month_name(m, true))
            .unwrap_or_else(|| "none".to_string());
        let header = format!(
            "{} {}年 [{}]  {} days, leap month: {leap}",
            self.year, self.sexagenary, self.zodiac, self.total_days
        );
        std::iter::once(header)
            .chain(self.months.iter().map(|span| {
                let name = month_name(span.month, span.is_leap).unwrap_or_default();
                format!("{}  {name}  {} days", span.first_day, span.days)
            }))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
