//! Error types for the renqing-lunar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the renqing-lunar crate.
///
/// Every variant is a recoverable, caller-visible failure. Out-of-range input
/// is reported rather than clamped to the nearest supported year.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LunarError {
    /// Returned when a luni-solar year lies outside the supported range.
    #[error("lunar year {year} is outside the supported range {min}..{max}", min = crate::MIN_YEAR, max = crate::MAX_YEAR)]
    YearOutOfRange {
        /// The year that was requested.
        year: i32,
    },

    /// Returned when a Gregorian date cannot be converted because it falls
    /// before the table epoch or after the last supported luni-solar day.
    #[error("date {date} is outside the supported lunar years {min}..{max}", min = crate::MIN_YEAR, max = crate::MAX_YEAR)]
    DateOutOfRange {
        /// The date that was requested.
        date: NaiveDate,
    },

    /// Returned when a month number is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the length of the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The number of days the month actually has.
        max_day: u8,
    },

    /// Returned when a leap month is requested for a year whose leap month
    /// is a different one, or which has none.
    #[error("lunar year {year} has no leap month {month}")]
    LeapMonthMismatch {
        /// The requested luni-solar year.
        year: i32,
        /// The month that was requested as a leap month.
        month: u8,
    },

    /// Returned when a reminder lead time is longer than a year.
    #[error("invalid reminder lead time: {lead_days} days (must be 0..=365)")]
    InvalidLeadDays {
        /// The rejected lead time.
        lead_days: u32,
    },
}
