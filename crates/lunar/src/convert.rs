//! Gregorian <-> luni-solar conversion by walking the year table.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::date::LunarDate;
use crate::error::LunarError;
use crate::table::{LunarYear, MAX_YEAR, MIN_YEAR, check_month, check_supported};

/// Returns the Gregorian date of luni-solar 1900-01-01, the table epoch.
pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 31).expect("1900-01-31 is a valid date")
}

/// Returns the last Gregorian date that [`solar_to_lunar`] accepts, the final
/// day of luni-solar year `MAX_YEAR - 1`.
pub fn last_supported_date() -> NaiveDate {
    let total: u64 = (MIN_YEAR..MAX_YEAR)
        .filter_map(|year| LunarYear::new(year).ok())
        .map(|info| u64::from(info.total_days()))
        .sum();
    epoch() + Days::new(total - 1)
}

/// Converts a Gregorian date to its luni-solar date.
///
/// Walks forward from the epoch one year at a time, then one month at a
/// time with the leap month placed directly after the ordinary month it
/// follows.
///
/// # Errors
///
/// Returns [`LunarError::DateOutOfRange`] if `date` precedes the epoch or
/// lies beyond [`last_supported_date`].
pub fn solar_to_lunar(date: NaiveDate) -> Result<LunarDate, LunarError> {
    let out_of_range = LunarError::DateOutOfRange { date };
    let mut offset = (date - epoch()).num_days();
    if offset < 0 {
        return Err(out_of_range);
    }

    for year in MIN_YEAR..MAX_YEAR {
        let info = LunarYear::new(year)?;
        let year_days = i64::from(info.total_days());
        if offset >= year_days {
            offset -= year_days;
            continue;
        }
        for month in info.months() {
            let month_days = i64::from(month.days());
            if offset < month_days {
                // offset < 30 here, so the day fits in a u8.
                let day = (offset + 1) as u8;
                return Ok(LunarDate::from_parts(
                    year,
                    month.month(),
                    day,
                    month.is_leap(),
                ));
            }
            offset -= month_days;
        }
    }
    Err(out_of_range)
}

/// Converts a luni-solar date to its Gregorian date.
///
/// # Errors
///
/// Returns [`LunarError::YearOutOfRange`] if `year` is not in
/// `MIN_YEAR..MAX_YEAR`, [`LunarError::InvalidMonth`] if `month` is not in
/// 1..=12, [`LunarError::LeapMonthMismatch`] if `is_leap_month` is set but
/// `month` is not the year's leap month, and [`LunarError::InvalidDay`] if
/// `day` exceeds the length of the requested month.
pub fn lunar_to_solar(
    year: i32,
    month: u8,
    day: u8,
    is_leap_month: bool,
) -> Result<NaiveDate, LunarError> {
    check_supported(year)?;
    check_month(month)?;
    let info = LunarYear::new(year)?;
    let max_day = info.days_in(month, is_leap_month)?;
    if !(1..=max_day).contains(&day) {
        return Err(LunarError::InvalidDay {
            day,
            month,
            max_day,
        });
    }

    let mut offset: u64 = (MIN_YEAR..year)
        .map(|y| LunarYear::new(y).map(|prior| u64::from(prior.total_days())))
        .sum::<Result<u64, _>>()?;
    offset += info
        .months()
        .take_while(|m| (m.month(), m.is_leap()) != (month, is_leap_month))
        .map(|m| u64::from(m.days()))
        .sum::<u64>();
    offset += u64::from(day - 1);

    epoch()
        .checked_add_days(Days::new(offset))
        .ok_or(LunarError::YearOutOfRange { year })
}

/// One month of a luni-solar year placed on the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthSpan {
    /// Ordinary month number (1..=12).
    pub month: u8,
    /// Whether this is the leap month following `month`.
    pub is_leap: bool,
    /// Length of the month, 29 or 30.
    pub days: u8,
    /// Gregorian date of the first day of the month.
    pub first_day: NaiveDate,
}

/// Lists the months of luni-solar `year` with their Gregorian start dates.
///
/// # Errors
///
/// Returns [`LunarError::YearOutOfRange`] if `year` is not supported.
pub fn month_spans(year: i32) -> Result<Vec<MonthSpan>, LunarError> {
    let mut first_day = lunar_to_solar(year, 1, 1, false)?;
    let mut spans = Vec::with_capacity(13);
    for month in LunarYear::new(year)?.months() {
        spans.push(MonthSpan {
            month: month.month(),
            is_leap: month.is_leap(),
            days: month.days(),
            first_day,
        });
        first_day = first_day + Days::new(u64::from(month.days()));
    }
    Ok(spans)
}
