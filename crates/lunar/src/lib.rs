//! # renqing-lunar
//!
//! Chinese luni-solar calendar arithmetic for luni-solar years 1900..2100.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     T["YEAR_TABLE (packed u32 per year)"] -->|"LunarYear::new()"| Y["LunarYear"]
//!     Y -->|".months()"| M["LunarMonth (leap after ordinary)"]
//!     G["NaiveDate"] -->|"solar_to_lunar()"| L["LunarDate"]
//!     L -->|"lunar_to_solar()"| G
//!     L -->|"festival_name()"| F["FESTIVALS"]
//!     F -->|"festivals_in_month() / upcoming_festivals()"| O["FestivalOccurrence"]
//!     L -->|"next_occurrence()"| N["next Gregorian date"]
//!     N -->|"next_reminder()"| R["Reminder"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use renqing_lunar::{festival_name, lunar_to_solar, solar_to_lunar};
//!
//! let new_year = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
//! let lunar = solar_to_lunar(new_year).unwrap();
//! assert_eq!((lunar.year(), lunar.month(), lunar.day()), (2024, 1, 1));
//! assert_eq!(lunar.to_string(), "甲辰年正月初一");
//! assert_eq!(festival_name(new_year), Some("春节"));
//!
//! // Leap months must be requested explicitly and must exist.
//! assert!(lunar_to_solar(2025, 6, 1, true).is_ok());
//! assert!(lunar_to_solar(2024, 6, 1, true).is_err());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `table` | Packed year table and bounds-checked accessors |
//! | `convert` | Gregorian <-> luni-solar conversion, month spans |
//! | `date` | `LunarDate` value type |
//! | `names` | Stem-branch, zodiac, month and day names |
//! | `festival` | Fixed festival table and scans |
//! | `occurrence` | Next occurrence of a luni-solar anniversary |
//! | `reminder` | Birthday reminders in either calendar |
//! | `error` | Error types |
//!
//! Everything is a pure function over compile-time constants, so all types
//! are `Send + Sync` and need no synchronisation.

mod convert;
mod date;
mod error;
mod festival;
mod names;
mod occurrence;
mod reminder;
mod table;

pub use convert::{MonthSpan, epoch, last_supported_date, lunar_to_solar, month_spans, solar_to_lunar};
pub use date::LunarDate;
pub use error::LunarError;
pub use festival::{
    FESTIVALS, Festival, FestivalOccurrence, festival_name, festival_on, festivals_in_month,
    upcoming_festivals,
};
pub use names::{
    EARTHLY_BRANCHES, HEAVENLY_STEMS, ZODIAC_ANIMALS, branch_index, day_name, month_name,
    sexagenary_name, stem_index, zodiac, zodiac_index,
};
pub use occurrence::next_occurrence;
pub use reminder::{Birthday, Reminder, ReminderPolicy, next_birthday, next_reminder};
pub use table::{LunarMonth, LunarYear, MAX_YEAR, MIN_YEAR, is_big_month, leap_month, year_days};
