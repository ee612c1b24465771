//! Next Gregorian occurrence of a recurring luni-solar anniversary.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::convert::lunar_to_solar;
use crate::error::LunarError;
use crate::table::{LunarYear, MAX_YEAR, MIN_YEAR, check_month};

/// Largest day number any luni-solar month can have.
const MAX_LUNAR_DAY: u8 = 30;

/// Finds the soonest date on or after `today` whose luni-solar month and day
/// are `month`/`day`.
///
/// Candidate luni-solar years run from the one before `today`'s Gregorian
/// year (still in progress during January and February) through the one
/// after it. Candidates are tried in calendar order, so the ordinary month
/// wins over its leap month whenever it has not yet passed. Years in which
/// the month is too short for `day` are skipped.
///
/// Returns `Ok(None)` when no candidate in that horizon qualifies, e.g. for
/// day 30 of a month that stays short, or near the edges of the table.
///
/// # Errors
///
/// Returns [`LunarError::InvalidMonth`] if `month` is not in 1..=12 and
/// [`LunarError::InvalidDay`] if `day` is not in 1..=30.
#[tracing::instrument]
pub fn next_occurrence(
    month: u8,
    day: u8,
    today: NaiveDate,
) -> Result<Option<NaiveDate>, LunarError> {
    check_month(month)?;
    if !(1..=MAX_LUNAR_DAY).contains(&day) {
        return Err(LunarError::InvalidDay {
            day,
            month,
            max_day: MAX_LUNAR_DAY,
        });
    }

    let first = (today.year() - 1).max(MIN_YEAR);
    let last = (today.year() + 1).min(MAX_YEAR - 1);
    for year in first..=last {
        let info = LunarYear::new(year)?;
        let leap_candidate = info.leap_month() == Some(month);
        for is_leap in [false, true] {
            if is_leap && !leap_candidate {
                continue;
            }
            match lunar_to_solar(year, month, day, is_leap) {
                Ok(date) if date >= today => return Ok(Some(date)),
                Ok(_) => {}
                Err(LunarError::InvalidDay { max_day, .. }) => {
                    debug!(year, month, day, is_leap, max_day, "month too short, skipping year");
                }
                Err(e) => return Err(e),
            }
        }
    }
    Ok(None)
}
