//! Luni-solar date value type.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::convert::{lunar_to_solar, solar_to_lunar};
use crate::error::LunarError;
use crate::names;

/// A date in the Chinese luni-solar calendar.
///
/// Ordering is chronological: by year, then month, with the ordinary month
/// before its leap month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LunarDate {
    year: i32,
    month: u8,
    is_leap_month: bool,
    day: u8,
}

impl LunarDate {
    /// Creates a validated `LunarDate`.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`lunar_to_solar`]: the year must be
    /// supported, the month in 1..=12, the leap flag must name the year's
    /// actual leap month and the day must fit the month's length.
    pub fn new(year: i32, month: u8, day: u8, is_leap_month: bool) -> Result<Self, LunarError> {
        lunar_to_solar(year, month, day, is_leap_month)?;
        Ok(Self::from_parts(year, month, day, is_leap_month))
    }

    /// Builds a date from components the caller has already validated.
    pub(crate) fn from_parts(year: i32, month: u8, day: u8, is_leap_month: bool) -> Self {
        Self {
            year,
            month,
            is_leap_month,
            day,
        }
    }

    /// Converts a Gregorian date. See [`solar_to_lunar`].
    ///
    /// # Errors
    ///
    /// Returns [`LunarError::DateOutOfRange`] outside the supported range.
    pub fn from_solar(date: NaiveDate) -> Result<Self, LunarError> {
        solar_to_lunar(date)
    }

    /// Returns the Gregorian date of this day.
    pub fn to_solar(self) -> NaiveDate {
        lunar_to_solar(self.year, self.month, self.day, self.is_leap_month)
            .expect("LunarDate always holds validated components")
    }

    /// Returns the luni-solar year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12). A leap month reports the ordinary month it
    /// follows.
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=30).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `true` if the date falls in the year's leap month.
    pub fn is_leap_month(self) -> bool {
        self.is_leap_month
    }

    /// Returns the month name, e.g. `正月` or `闰六月`.
    pub fn month_name(self) -> String {
        names::month_name(self.month, self.is_leap_month)
            .expect("LunarDate month is always in 1..=12")
    }

    /// Returns the day name, e.g. `初一`.
    pub fn day_name(self) -> &'static str {
        names::day_name(self.day).expect("LunarDate day is always in 1..=30")
    }

    /// Returns the month and day label, e.g. `正月初一`.
    pub fn label(self) -> String {
        format!("{}{}", self.month_name(), self.day_name())
    }

    /// Returns the stem-branch name of the year, e.g. `甲辰`.
    pub fn sexagenary_year(self) -> String {
        names::sexagenary_name(self.year)
    }

    /// Returns the zodiac animal of the year.
    pub fn zodiac(self) -> &'static str {
        names::zodiac(self.year)
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}年{}", self.sexagenary_year(), self.label())
    }
}
