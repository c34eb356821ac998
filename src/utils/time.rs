//! Time utilities

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Calendar day activity is recorded against
pub fn today_utc() -> NaiveDate {
    now_utc().date_naive()
}

/// Year and month of a day
pub fn year_month(day: NaiveDate) -> (i32, u32) {
    (day.year(), day.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_month() {
        let day = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
        assert_eq!(year_month(day), (2025, 11));
    }
}
