//! Traditional names: sexagenary cycle, zodiac, month and day numerals.

/// The ten heavenly stems.
pub const HEAVENLY_STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// The twelve earthly branches.
pub const EARTHLY_BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// The twelve zodiac animals, starting from the rat.
pub const ZODIAC_ANIMALS: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

/// A 甲子 year.
const CYCLE_ANCHOR_YEAR: i32 = 1984;
/// A rat year.
const ZODIAC_ANCHOR_YEAR: i32 = 1900;

const LEAP_PREFIX: &str = "闰";

#[rustfmt::skip]
const MONTH_NAMES: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月",
    "七月", "八月", "九月", "十月", "冬月", "腊月",
];

#[rustfmt::skip]
const DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十",
    "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十",
    "廿一", "廿二", "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

fn cycle_index(year: i32, anchor: i32, len: usize) -> usize {
    // `len` is 10 or 12, so neither conversion can fail or truncate.
    let len = len as i64;
    (i64::from(year) - i64::from(anchor)).rem_euclid(len) as usize
}

/// Returns the index of `year`'s heavenly stem (0 = 甲).
pub fn stem_index(year: i32) -> usize {
    cycle_index(year, CYCLE_ANCHOR_YEAR, HEAVENLY_STEMS.len())
}

/// Returns the index of `year`'s earthly branch (0 = 子).
pub fn branch_index(year: i32) -> usize {
    cycle_index(year, CYCLE_ANCHOR_YEAR, EARTHLY_BRANCHES.len())
}

/// Returns the index of `year`'s zodiac animal (0 = rat).
pub fn zodiac_index(year: i32) -> usize {
    cycle_index(year, ZODIAC_ANCHOR_YEAR, ZODIAC_ANIMALS.len())
}

/// Returns the two-character stem-branch name of `year`, e.g. `甲子`.
pub fn sexagenary_name(year: i32) -> String {
    format!(
        "{}{}",
        HEAVENLY_STEMS[stem_index(year)],
        EARTHLY_BRANCHES[branch_index(year)]
    )
}

/// Returns the zodiac animal of `year`.
pub fn zodiac(year: i32) -> &'static str {
    ZODIAC_ANIMALS[zodiac_index(year)]
}

/// Returns the traditional name of a month, `None` outside 1..=12.
pub fn month_name(month: u8, is_leap: bool) -> Option<String> {
    let name = MONTH_NAMES.get(usize::from(month).checked_sub(1)?)?;
    Some(if is_leap {
        format!("{LEAP_PREFIX}{name}")
    } else {
        (*name).to_string()
    })
}

/// Returns the traditional name of a day of the month, `None` outside 1..=30.
pub fn day_name(day: u8) -> Option<&'static str> {
    DAY_NAMES.get(usize::from(day).checked_sub(1)?).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_years() {
        assert_eq!(stem_index(1984), 0);
        assert_eq!(branch_index(1984), 0);
        assert_eq!(sexagenary_name(1984), "甲子");
        assert_eq!(zodiac_index(1900), 0);
        assert_eq!(zodiac(1900), "鼠");
    }

    #[test]
    fn known_years() {
        assert_eq!(sexagenary_name(2024), "甲辰");
        assert_eq!(zodiac(2024), "龙");
        assert_eq!(sexagenary_name(2025), "乙巳");
        assert_eq!(zodiac(2025), "蛇");
        assert_eq!(sexagenary_name(1900), "庚子");
        assert_eq!(sexagenary_name(1949), "己丑");
    }

    #[test]
    fn years_before_anchor_are_non_negative() {
        // 1983 is the last year of the previous cycle.
        assert_eq!(stem_index(1983), 9);
        assert_eq!(branch_index(1983), 11);
        assert_eq!(sexagenary_name(1983), "癸亥");
        assert_eq!(zodiac(1899), "猪");
        assert_eq!(sexagenary_name(i32::MIN).chars().count(), 2);
    }

    #[test]
    fn cycle_repeats_every_sixty_years() {
        for year in 1900..1960 {
            assert_eq!(sexagenary_name(year), sexagenary_name(year + 60));
        }
        let distinct: std::collections::HashSet<String> =
            (1984..2044).map(sexagenary_name).collect();
        assert_eq!(distinct.len(), 60);
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(1, false).as_deref(), Some("正月"));
        assert_eq!(month_name(11, false).as_deref(), Some("冬月"));
        assert_eq!(month_name(12, false).as_deref(), Some("腊月"));
        assert_eq!(month_name(6, true).as_deref(), Some("闰六月"));
        assert_eq!(month_name(0, false), None);
        assert_eq!(month_name(13, true), None);
    }

    #[test]
    fn day_names() {
        assert_eq!(day_name(1), Some("初一"));
        assert_eq!(day_name(10), Some("初十"));
        assert_eq!(day_name(15), Some("十五"));
        assert_eq!(day_name(20), Some("二十"));
        assert_eq!(day_name(23), Some("廿三"));
        assert_eq!(day_name(30), Some("三十"));
        assert_eq!(day_name(0), None);
        assert_eq!(day_name(31), None);
    }
}
