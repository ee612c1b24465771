//! Fixed luni-solar festivals and Gregorian-range festival scans.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use tracing::trace;

use crate::convert::{epoch, last_supported_date, solar_to_lunar};
use crate::date::LunarDate;
use crate::error::LunarError;
use crate::table::check_month;

/// A festival held on a fixed luni-solar month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Festival {
    name: &'static str,
    month: u8,
    day: u8,
}

impl Festival {
    const fn new(name: &'static str, month: u8, day: u8) -> Self {
        Self { name, month, day }
    }

    /// Returns the festival's name.
    pub fn name(self) -> &'static str {
        self.name
    }

    /// Returns the luni-solar month of the festival.
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the luni-solar day of the festival.
    pub fn day(self) -> u8 {
        self.day
    }
}

/// All fixed festivals. No two entries share a (month, day) pair.
pub const FESTIVALS: [Festival; 11] = [
    Festival::new("春节", 1, 1),
    Festival::new("元宵节", 1, 15),
    Festival::new("龙抬头", 2, 2),
    Festival::new("端午节", 5, 5),
    Festival::new("七夕节", 7, 7),
    Festival::new("中元节", 7, 15),
    Festival::new("中秋节", 8, 15),
    Festival::new("重阳节", 9, 9),
    Festival::new("寒衣节", 10, 1),
    Festival::new("腊八节", 12, 8),
    Festival::new("小年", 12, 23),
];

/// Looks up the festival held on luni-solar `month`/`day`.
pub fn festival_on(month: u8, day: u8) -> Option<Festival> {
    FESTIVALS
        .iter()
        .find(|f| f.month == month && f.day == day)
        .copied()
}

/// Returns the festival name for a Gregorian date.
///
/// Dates in a leap month never match, even when month and day coincide with
/// a festival. Dates outside the supported range have no festival.
pub fn festival_name(date: NaiveDate) -> Option<&'static str> {
    let lunar = solar_to_lunar(date).ok()?;
    festival_for(lunar).map(Festival::name)
}

fn festival_for(lunar: LunarDate) -> Option<Festival> {
    if lunar.is_leap_month() {
        return None;
    }
    festival_on(lunar.month(), lunar.day())
}

/// A festival located on the Gregorian calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FestivalOccurrence {
    /// Festival name.
    pub name: &'static str,
    /// Gregorian date of the festival.
    pub date: NaiveDate,
    /// Luni-solar date of the festival.
    pub lunar: LunarDate,
}

impl FestivalOccurrence {
    /// Returns the luni-solar label of the occurrence, e.g. `八月十五`.
    pub fn lunar_label(&self) -> String {
        self.lunar.label()
    }
}

fn occurrence_on(date: NaiveDate) -> Option<FestivalOccurrence> {
    let lunar = solar_to_lunar(date).ok()?;
    festival_for(lunar).map(|festival| FestivalOccurrence {
        name: festival.name,
        date,
        lunar,
    })
}

/// Lists the festivals falling in Gregorian `year`/`month`, ascending by day.
///
/// Days of the month outside the supported range are skipped.
///
/// # Errors
///
/// Returns [`LunarError::InvalidMonth`] if `month` is not in 1..=12,
/// [`LunarError::YearOutOfRange`] if `year` has no Gregorian representation
/// and [`LunarError::DateOutOfRange`] if no day of the month is supported.
#[tracing::instrument]
pub fn festivals_in_month(year: i32, month: u8) -> Result<Vec<FestivalOccurrence>, LunarError> {
    check_month(month)?;
    let first = NaiveDate::from_ymd_opt(year, u32::from(month), 1)
        .ok_or(LunarError::YearOutOfRange { year })?;
    let days: Vec<NaiveDate> = first
        .iter_days()
        .take_while(|d| d.month() == first.month())
        .collect();
    let supported = epoch()..=last_supported_date();
    if !days.iter().any(|d| supported.contains(d)) {
        return Err(LunarError::DateOutOfRange { date: first });
    }

    let found: Vec<FestivalOccurrence> = days.into_iter().filter_map(occurrence_on).collect();
    trace!(n = found.len(), "festivals found");
    Ok(found)
}

/// Lists the festivals from `today` through `today + window_days`, inclusive,
/// in date order.
///
/// Only the part of the window inside the supported range is scanned.
#[tracing::instrument]
pub fn upcoming_festivals(today: NaiveDate, window_days: u32) -> Vec<FestivalOccurrence> {
    let start = today.max(epoch());
    let end = today
        .checked_add_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MAX)
        .min(last_supported_date());
    if start > end {
        return Vec::new();
    }
    let found: Vec<FestivalOccurrence> = start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter_map(occurrence_on)
        .collect();
    trace!(n = found.len(), "upcoming festivals found");
    found
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn table_keys_are_unique() {
        let keys: HashSet<(u8, u8)> = FESTIVALS.iter().map(|f| (f.month, f.day)).collect();
        assert_eq!(keys.len(), FESTIVALS.len());
    }

    #[test]
    fn table_names_are_unique() {
        let names: HashSet<&str> = FESTIVALS.iter().map(|f| f.name).collect();
        assert_eq!(names.len(), FESTIVALS.len());
    }

    #[test]
    fn table_entries_are_valid_lunar_days() {
        for f in FESTIVALS {
            assert!((1..=12).contains(&f.month()), "{}", f.name());
            assert!((1..=29).contains(&f.day()), "{}", f.name());
        }
    }

    #[test]
    fn festival_on_lookup() {
        assert_eq!(festival_on(8, 15).map(Festival::name), Some("中秋节"));
        assert_eq!(festival_on(8, 16), None);
    }

    #[test]
    fn spring_festival_2024() {
        assert_eq!(festival_name(ymd(2024, 2, 10)), Some("春节"));
    }

    #[test]
    fn ordinary_day_has_no_festival() {
        assert_eq!(festival_name(ymd(2024, 2, 11)), None);
    }

    #[test]
    fn leap_month_never_matches() {
        // 2023-03-23 is the second day of the leap second month.
        assert_eq!(
            solar_to_lunar(ymd(2023, 3, 23)).unwrap(),
            LunarDate::from_parts(2023, 2, 2, true)
        );
        assert_eq!(festival_name(ymd(2023, 3, 23)), None);
        assert_eq!(festival_name(ymd(2023, 2, 21)), Some("龙抬头"));
    }

    #[test]
    fn out_of_range_has_no_festival() {
        assert_eq!(festival_name(ymd(1850, 1, 1)), None);
    }

    #[test]
    fn occurrence_label() {
        let found = occurrence_on(ymd(2024, 9, 17)).unwrap();
        assert_eq!(found.name, "中秋节");
        assert_eq!(found.lunar_label(), "八月十五");
    }

    #[test]
    fn invalid_month() {
        assert_eq!(
            festivals_in_month(2024, 13).unwrap_err(),
            LunarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn unrepresentable_year() {
        assert_eq!(
            festivals_in_month(300_000, 6).unwrap_err(),
            LunarError::YearOutOfRange { year: 300_000 }
        );
        assert_eq!(
            festivals_in_month(300_000, 13).unwrap_err(),
            LunarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn month_entirely_out_of_range() {
        assert_eq!(
            festivals_in_month(1899, 6).unwrap_err(),
            LunarError::DateOutOfRange {
                date: ymd(1899, 6, 1)
            }
        );
    }

    #[test]
    fn partially_supported_month_is_scanned() {
        // Only 1900-01-31 is supported in January 1900, and it is 春节.
        let found = festivals_in_month(1900, 1).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].date, ymd(1900, 1, 31));
        assert_eq!(found[0].name, "春节");
    }

    #[test]
    fn upcoming_window_clamped_to_table_end() {
        let today = ymd(2095, 1, 1);
        let to_end = u32::try_from((last_supported_date() - today).num_days()).unwrap();
        let started = std::time::Instant::now();
        let clamped = upcoming_festivals(today, u32::MAX);
        assert!(started.elapsed() < std::time::Duration::from_secs(10));
        assert_eq!(clamped, upcoming_festivals(today, to_end));
        assert_eq!(clamped.last().map(|f| f.name), Some("小年"));
    }

    #[test]
    fn upcoming_before_epoch_starts_at_epoch() {
        let found = upcoming_festivals(ymd(1900, 1, 1), 30);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].date, epoch());
    }

    #[test]
    fn upcoming_zero_window_is_today_only() {
        let found = upcoming_festivals(ymd(2024, 2, 10), 0);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "春节");
    }
}
