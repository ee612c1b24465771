//! Birthday reminder scheduling for luni-solar and Gregorian birthdays.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::error::LunarError;
use crate::occurrence::next_occurrence;
use crate::table::check_month;

/// Longest accepted reminder lead time.
const MAX_LEAD_DAYS: u32 = 365;

/// Maximum day per Gregorian month, counting 29 February.
const SOLAR_MAX_DAY: [u8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A contact's birthday, kept in either calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "calendar", rename_all = "lowercase")]
pub enum Birthday {
    /// Celebrated on a luni-solar month and day.
    Lunar {
        /// Luni-solar month (1..=12).
        month: u8,
        /// Luni-solar day (1..=30).
        day: u8,
    },
    /// Celebrated on a Gregorian month and day.
    Solar {
        /// Gregorian month (1..=12).
        month: u8,
        /// Gregorian day, 29 February allowed.
        day: u8,
    },
}

impl Birthday {
    /// Creates a luni-solar birthday.
    ///
    /// # Errors
    ///
    /// Returns [`LunarError::InvalidMonth`] or [`LunarError::InvalidDay`] if
    /// the components cannot name a luni-solar day.
    pub fn new_lunar(month: u8, day: u8) -> Result<Self, LunarError> {
        check_month(month)?;
        if !(1..=30).contains(&day) {
            return Err(LunarError::InvalidDay {
                day,
                month,
                max_day: 30,
            });
        }
        Ok(Self::Lunar { month, day })
    }

    /// Creates a Gregorian birthday.
    ///
    /// # Errors
    ///
    /// Returns [`LunarError::InvalidMonth`] or [`LunarError::InvalidDay`] if
    /// the components cannot name a Gregorian day in some year.
    pub fn new_solar(month: u8, day: u8) -> Result<Self, LunarError> {
        check_month(month)?;
        let max_day = SOLAR_MAX_DAY[usize::from(month - 1)];
        if !(1..=max_day).contains(&day) {
            return Err(LunarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self::Solar { month, day })
    }
}

/// How far ahead of a birthday a reminder fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderPolicy {
    lead_days: u32,
}

impl Default for ReminderPolicy {
    fn default() -> Self {
        Self { lead_days: 3 }
    }
}

impl ReminderPolicy {
    /// Creates a policy firing `lead_days` before each birthday.
    ///
    /// # Errors
    ///
    /// Returns [`LunarError::InvalidLeadDays`] if `lead_days` exceeds 365.
    pub fn new(lead_days: u32) -> Result<Self, LunarError> {
        let policy = Self { lead_days };
        policy.validate()?;
        Ok(policy)
    }

    /// Returns the lead time in days.
    pub fn lead_days(&self) -> u32 {
        self.lead_days
    }

    /// Validates the policy.
    ///
    /// # Errors
    ///
    /// Returns [`LunarError::InvalidLeadDays`] if the lead time exceeds 365.
    pub fn validate(&self) -> Result<(), LunarError> {
        if self.lead_days > MAX_LEAD_DAYS {
            return Err(LunarError::InvalidLeadDays {
                lead_days: self.lead_days,
            });
        }
        Ok(())
    }
}

/// A scheduled reminder for the next birthday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reminder {
    /// Gregorian date of the birthday itself.
    pub occurrence: NaiveDate,
    /// Gregorian date the reminder should fire.
    pub trigger: NaiveDate,
    /// Days from `today` until the birthday.
    pub days_until: i64,
}

/// Returns the next birthday on or after `today`.
///
/// Gregorian 29 February birthdays are observed on 28 February in common
/// years. Luni-solar birthdays follow [`next_occurrence`] and may yield
/// `None` near the table edges.
///
/// # Errors
///
/// Returns [`LunarError::InvalidMonth`] or [`LunarError::InvalidDay`] for
/// components that bypassed the [`Birthday`] constructors.
pub fn next_birthday(birthday: Birthday, today: NaiveDate) -> Result<Option<NaiveDate>, LunarError> {
    match birthday {
        Birthday::Lunar { month, day } => next_occurrence(month, day, today),
        Birthday::Solar { month, day } => {
            Birthday::new_solar(month, day)?;
            Ok((today.year()..=today.year() + 1)
                .filter_map(|year| solar_anniversary(year, month, day))
                .find(|date| *date >= today))
        }
    }
}

fn solar_anniversary(year: i32, month: u8, day: u8) -> Option<NaiveDate> {
    let (month, day) = (u32::from(month), u32::from(day));
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
        // Only 29 February can be missing once the birthday is validated.
        NaiveDate::from_ymd_opt(year, month, day - 1)
    })
}

/// Schedules the reminder for the next birthday on or after `today`.
///
/// The trigger fires `policy.lead_days()` before the birthday, or today when
/// the birthday is already closer than that.
///
/// # Errors
///
/// Returns the errors of [`next_birthday`] and [`ReminderPolicy::validate`].
pub fn next_reminder(
    birthday: Birthday,
    today: NaiveDate,
    policy: &ReminderPolicy,
) -> Result<Option<Reminder>, LunarError> {
    policy.validate()?;
    let Some(occurrence) = next_birthday(birthday, today)? else {
        return Ok(None);
    };
    let trigger = occurrence
        .checked_sub_days(Days::new(u64::from(policy.lead_days)))
        .map_or(today, |date| date.max(today));
    Ok(Some(Reminder {
        occurrence,
        trigger,
        days_until: (occurrence - today).num_days(),
    }))
}
