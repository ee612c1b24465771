//! Packed per-year month-length table and its decoded view.

use crate::error::LunarError;

/// First luni-solar year covered by the table and by conversions.
pub const MIN_YEAR: i32 = 1900;

/// Exclusive upper bound of the luni-solar years accepted by conversions.
///
/// The table itself carries one more row (2100) which stays readable through
/// [`LunarYear`].
pub const MAX_YEAR: i32 = 2100;

/// Bits 0..=11: one bit per ordinary month, month `m` at bit `12 - m`.
const MONTH_MASK: u32 = 0x0fff;
/// Bits 16..=19: leap month index, 0 when the year has none.
const LEAP_SHIFT: u32 = 16;
const LEAP_MASK: u32 = 0x0f;
/// Bit 20: the leap month has 30 days.
const LEAP_BIG_BIT: u32 = 1 << 20;

const SMALL_MONTH: u8 = 29;
const BIG_MONTH: u8 = 30;

/// One packed entry per luni-solar year 1900..=2100.
#[rustfmt::skip]
pub(crate) const YEAR_TABLE: [u32; 201] = [
    0x0804bd, 0x0004ae, 0x000a57, 0x05054d, 0x000d26, 0x000d95, 0x140655, 0x00056a, 0x0009ad, 0x02055d,  // 1900-1909
    0x0004ae, 0x060a5b, 0x000a4d, 0x000d25, 0x150d25, 0x000b54, 0x000d6a, 0x020ada, 0x00095b, 0x170497,  // 1910-1919
    0x000497, 0x000a4b, 0x050b4b, 0x0006a5, 0x0006d4, 0x140ab5, 0x0002b6, 0x000957, 0x02052f, 0x000497,  // 1920-1929
    0x060656, 0x000d4a, 0x000ea5, 0x1506a9, 0x0005ad, 0x0002b6, 0x13086e, 0x00092e, 0x170c8d, 0x000c95,  // 1930-1939
    0x000d4a, 0x160d8a, 0x000b55, 0x00056a, 0x140a5b, 0x00025d, 0x00092d, 0x020d2b, 0x000a95, 0x070b55,  // 1940-1949
    0x0006ca, 0x000b55, 0x150535, 0x0004da, 0x000a5b, 0x130457, 0x00052b, 0x080a9a, 0x000e95, 0x0006aa,  // 1950-1959
    0x060aea, 0x000ab5, 0x0004b6, 0x040aae, 0x000a57, 0x000526, 0x030f26, 0x000d95, 0x0705b5, 0x00056a,  // 1960-1969
    0x00096d, 0x0504dd, 0x0004ad, 0x000a4d, 0x040d4d, 0x000d25, 0x080d55, 0x000b54, 0x000b6a, 0x16095a,  // 1970-1979
    0x00095b, 0x00049b, 0x040a97, 0x000a4b, 0x0a0b27, 0x0006a5, 0x0006d4, 0x060af4, 0x000ab6, 0x000957,  // 1980-1989
    0x0504af, 0x000497, 0x00064b, 0x03074a, 0x000ea5, 0x0806b5, 0x0005ac, 0x000ab6, 0x05096d, 0x00092e,  // 1990-1999
    0x000c96, 0x040d95, 0x000d4a, 0x000da5, 0x020755, 0x00056a, 0x070abb, 0x00025d, 0x00092d, 0x050cab,  // 2000-2009
    0x000a95, 0x000b4a, 0x040baa, 0x000ad5, 0x09055d, 0x0004ba, 0x000a5b, 0x160517, 0x00052b, 0x000a93,  // 2010-2019
    0x040795, 0x0006aa, 0x000ad5, 0x0205b5, 0x0004b6, 0x060a6e, 0x000a4e, 0x000d26, 0x050ea6, 0x000d53,  // 2020-2029
    0x0005aa, 0x03076a, 0x00096d, 0x0b04af, 0x0004ad, 0x000a4d, 0x160d0b, 0x000d25, 0x000d52, 0x050dd4,  // 2030-2039
    0x000b5a, 0x00056d, 0x02055b, 0x00049b, 0x070a57, 0x000a4b, 0x000aa5, 0x150b25, 0x0006d2, 0x000ada,  // 2040-2049
    0x1304b6, 0x000937, 0x08049f, 0x000497, 0x00064b, 0x16068a, 0x000ea5, 0x0006b2, 0x140a6c, 0x000aae,  // 2050-2059
    0x00092e, 0x030d2e, 0x000c96, 0x070d55, 0x000d4a, 0x000da5, 0x0505d5, 0x00056a, 0x000a6d, 0x04055d,  // 2060-2069
    0x00052d, 0x080a9b, 0x000a95, 0x000b4a, 0x060b6a, 0x000ad5, 0x00055a, 0x040aba, 0x000a5b, 0x00052b,  // 2070-2079
    0x030b27, 0x000693, 0x070733, 0x0006aa, 0x000ad5, 0x1504b5, 0x0004b6, 0x000a57, 0x04054e, 0x000d16,  // 2080-2089
    0x080e96, 0x000d52, 0x000daa, 0x1606aa, 0x00056d, 0x0004ae, 0x040a9d, 0x000a2d, 0x000d15, 0x020f25,  // 2090-2099
    0x000d52,  // 2100
];

/// Checks that `year` is accepted by the conversion functions.
pub(crate) fn check_supported(year: i32) -> Result<(), LunarError> {
    if (MIN_YEAR..MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(LunarError::YearOutOfRange { year })
    }
}

pub(crate) fn check_month(month: u8) -> Result<(), LunarError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(LunarError::InvalidMonth { month })
    }
}

/// One month of a luni-solar year, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarMonth {
    month: u8,
    is_leap: bool,
    days: u8,
}

impl LunarMonth {
    /// Returns the ordinary month number (1..=12) this month carries.
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns `true` for the intercalary month following [`Self::month`].
    pub fn is_leap(self) -> bool {
        self.is_leap
    }

    /// Returns the length of the month, 29 or 30.
    pub fn days(self) -> u8 {
        self.days
    }
}

/// Decoded table row for a single luni-solar year.
///
/// All bit extraction over [`YEAR_TABLE`] goes through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarYear {
    year: i32,
    bits: u32,
}

impl LunarYear {
    /// Looks up the table row for `year`.
    ///
    /// # Errors
    ///
    /// Returns [`LunarError::YearOutOfRange`] if the table has no row for
    /// `year`.
    pub fn new(year: i32) -> Result<Self, LunarError> {
        let bits = year
            .checked_sub(MIN_YEAR)
            .and_then(|offset| usize::try_from(offset).ok())
            .and_then(|index| YEAR_TABLE.get(index))
            .copied()
            .ok_or(LunarError::YearOutOfRange { year })?;
        Ok(Self { year, bits })
    }

    /// Returns the luni-solar year number.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the ordinary month the leap month follows, if the year has one.
    pub fn leap_month(self) -> Option<u8> {
        // The index is four bits wide, so the cast cannot truncate.
        let index = ((self.bits >> LEAP_SHIFT) & LEAP_MASK) as u8;
        (index != 0).then_some(index)
    }

    /// Returns `true` if ordinary month `month` has 30 days.
    ///
    /// # Errors
    ///
    /// Returns [`LunarError::InvalidMonth`] if `month` is not in 1..=12.
    pub fn is_big_month(self, month: u8) -> Result<bool, LunarError> {
        check_month(month)?;
        Ok(self.month_bit(month))
    }

    /// Returns the length of ordinary month `month`.
    ///
    /// # Errors
    ///
    /// Returns [`LunarError::InvalidMonth`] if `month` is not in 1..=12.
    pub fn month_days(self, month: u8) -> Result<u8, LunarError> {
        check_month(month)?;
        Ok(self.ordinary_days(month))
    }

    /// Returns the length of the leap month, if the year has one.
    pub fn leap_month_days(self) -> Option<u8> {
        self.leap_month().map(|_| {
            if self.bits & LEAP_BIG_BIT != 0 {
                BIG_MONTH
            } else {
                SMALL_MONTH
            }
        })
    }

    /// Returns the length of `month`, or of its leap variant when `is_leap`.
    ///
    /// # Errors
    ///
    /// Returns [`LunarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`LunarError::LeapMonthMismatch`] if `is_leap` is set and
    /// `month` is not this year's leap month.
    pub fn days_in(self, month: u8, is_leap: bool) -> Result<u8, LunarError> {
        check_month(month)?;
        if !is_leap {
            return Ok(self.ordinary_days(month));
        }
        match (self.leap_month(), self.leap_month_days()) {
            (Some(leap), Some(days)) if leap == month => Ok(days),
            _ => Err(LunarError::LeapMonthMismatch {
                year: self.year,
                month,
            }),
        }
    }

    /// Returns the number of days in the whole year, leap month included.
    pub fn total_days(self) -> u16 {
        self.months().map(|m| u16::from(m.days)).sum()
    }

    /// Iterates over the 12 or 13 months of the year in calendar order.
    ///
    /// A leap month is yielded immediately after the ordinary month it
    /// follows.
    pub fn months(self) -> impl Iterator<Item = LunarMonth> {
        (1..=12u8).flat_map(move |month| {
            let ordinary = LunarMonth {
                month,
                is_leap: false,
                days: self.ordinary_days(month),
            };
            let leap = self
                .leap_month_days()
                .filter(|_| self.leap_month() == Some(month))
                .map(|days| LunarMonth {
                    month,
                    is_leap: true,
                    days,
                });
            std::iter::once(ordinary).chain(leap)
        })
    }

    fn month_bit(self, month: u8) -> bool {
        let bit = 12 - u32::from(month);
        (self.bits & MONTH_MASK) & (1 << bit) != 0
    }

    fn ordinary_days(self, month: u8) -> u8 {
        if self.month_bit(month) {
            BIG_MONTH
        } else {
            SMALL_MONTH
        }
    }
}

/// Returns `true` if ordinary month `month` of `year` has 30 days.
///
/// # Errors
///
/// Returns [`LunarError::YearOutOfRange`] or [`LunarError::InvalidMonth`].
pub fn is_big_month(year: i32, month: u8) -> Result<bool, LunarError> {
    LunarYear::new(year)?.is_big_month(month)
}

/// Returns the leap month index of `year`, `None` when it has no leap month.
///
/// # Errors
///
/// Returns [`LunarError::YearOutOfRange`] if the table has no row for `year`.
pub fn leap_month(year: i32) -> Result<Option<u8>, LunarError> {
    Ok(LunarYear::new(year)?.leap_month())
}

/// Returns the total number of days in luni-solar year `year`.
///
/// # Errors
///
/// Returns [`LunarError::YearOutOfRange`] if the table has no row for `year`.
pub fn year_days(year: i32) -> Result<u16, LunarError> {
    Ok(LunarYear::new(year)?.total_days())
}
