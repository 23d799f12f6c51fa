//! Season label resolution
//!
//! An NBA season tips off in October and finishes the following calendar year.

use chrono::{Datelike, Local, NaiveDate};

/// First month of a new season
const SEASON_START_MONTH: u32 = 10;

/// Season label ("YYYY-YY") active in the given year and month
pub fn season_label(year: i32, month: u32) -> String {
    if month >= SEASON_START_MONTH {
        format!("{}-{:02}", year, (year + 1).rem_euclid(100))
    } else {
        format!("{}-{:02}", year - 1, year.rem_euclid(100))
    }
}

/// Season label active on a calendar date
pub fn season_for_date(date: NaiveDate) -> String {
    season_label(date.year(), date.month())
}

/// Season label for today, per the local clock
pub fn current_season() -> String {
    season_for_date(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_october_starts_new_season() {
        let date = NaiveDate::from_ymd_opt(2024, 10, 5).unwrap();
        assert_eq!(season_for_date(date), "2024-25");
    }

    #[test]
    fn test_spring_belongs_to_previous_season() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(season_for_date(date), "2023-24");
    }

    #[test]
    fn test_month_boundaries() {
        assert_eq!(season_label(2024, 9), "2023-24");
        assert_eq!(season_label(2024, 12), "2024-25");
        assert_eq!(season_label(2024, 1), "2023-24");
    }

    #[test]
    fn test_century_rollover() {
        assert_eq!(season_label(1999, 11), "1999-00");
        assert_eq!(season_label(2000, 2), "1999-00");
        assert_eq!(season_label(2009, 10), "2009-10");
    }
}
