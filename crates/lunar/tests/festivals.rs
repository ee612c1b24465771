use chrono::{Days, NaiveDate};
use renqing_lunar::{
    FESTIVALS, LunarYear, MAX_YEAR, MIN_YEAR, festival_name, festivals_in_month, lunar_to_solar,
    solar_to_lunar, upcoming_festivals,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn february_2024() {
    let found = festivals_in_month(2024, 2).unwrap();
    let summary: Vec<(NaiveDate, &str, String)> = found
        .iter()
        .map(|f| (f.date, f.name, f.lunar_label()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (ymd(2024, 2, 2), "小年", "腊月廿三".to_string()),
            (ymd(2024, 2, 10), "春节", "正月初一".to_string()),
            (ymd(2024, 2, 24), "元宵节", "正月十五".to_string()),
        ]
    );
    // The 小年 of February 2024 still belongs to lunar 2023.
    assert_eq!(found[0].lunar.year(), 2023);
}

#[test]
fn january_2025_ascending() {
    let found = festivals_in_month(2025, 1).unwrap();
    let names: Vec<&str> = found.iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["腊八节", "小年", "春节"]);
    let dates: Vec<NaiveDate> = found.iter().map(|f| f.date).collect();
    assert_eq!(dates, vec![ymd(2025, 1, 7), ymd(2025, 1, 22), ymd(2025, 1, 29)]);
}

#[test]
fn month_without_festivals() {
    // March 2023 falls entirely in the second month and its leap month.
    assert!(festivals_in_month(2023, 3).unwrap().is_empty());
}

#[test]
fn september_2024_mid_autumn_only() {
    let found = festivals_in_month(2024, 9).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "中秋节");
    assert_eq!(found[0].date, ymd(2024, 9, 17));
}

#[test]
fn leap_month_dates_never_carry_festivals() {
    for year in MIN_YEAR..MAX_YEAR {
        let info = LunarYear::new(year).unwrap();
        let Some(leap) = info.leap_month() else {
            continue;
        };
        for festival in FESTIVALS.iter().filter(|f| f.month() == leap) {
            let Ok(date) = lunar_to_solar(year, leap, festival.day(), true) else {
                continue;
            };
            assert!(solar_to_lunar(date).unwrap().is_leap_month());
            assert_eq!(
                festival_name(date),
                None,
                "{date} is leap {leap}/{} of {year}",
                festival.day()
            );
        }
    }
}

#[test]
fn every_festival_found_each_year() {
    for year in [1950, 2000, 2024, 2025, 2060] {
        for festival in FESTIVALS {
            let date = lunar_to_solar(year, festival.month(), festival.day(), false).unwrap();
            assert_eq!(festival_name(date), Some(festival.name()), "{year} {date}");
        }
    }
}

#[test]
fn upcoming_sixty_days() {
    let found = upcoming_festivals(ymd(2024, 9, 1), 60);
    let summary: Vec<(NaiveDate, &str)> = found.iter().map(|f| (f.date, f.name)).collect();
    assert_eq!(
        summary,
        vec![(ymd(2024, 9, 17), "中秋节"), (ymd(2024, 10, 11), "重阳节")]
    );
}

#[test]
fn upcoming_window_is_inclusive() {
    let today = ymd(2024, 9, 1);
    let end = ymd(2024, 9, 17);
    let days = u32::try_from((end - today).num_days()).unwrap();
    assert_eq!(upcoming_festivals(today, days).len(), 1);
    assert!(upcoming_festivals(today, days - 1).is_empty());
}

#[test]
fn upcoming_past_table_end_is_empty() {
    let start = renqing_lunar::last_supported_date() + Days::new(1);
    assert!(upcoming_festivals(start, 30).is_empty());
}
