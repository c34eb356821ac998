//! Calendar views over daily solve counts

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::{
    constants::MAX_INTENSITY_LEVEL,
    error::{AppError, AppResult},
    models::ActivityMap,
};

/// Map a count to its intensity bucket, capped at the highest level
pub fn intensity(count: u32) -> u8 {
    count.min(MAX_INTENSITY_LEVEL as u32) as u8
}

/// One day in the month grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    pub count: u32,
    pub intensity: u8,
    pub is_today: bool,
}

/// Month grid, Sunday-first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    /// Blank cells before day 1 so it lands in its weekday column
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

impl MonthView {
    /// Grid cells in display order; `None` is a padding cell
    pub fn cells(&self) -> impl Iterator<Item = Option<&DayCell>> {
        std::iter::repeat_n(None, self.leading_blanks as usize).chain(self.days.iter().map(Some))
    }
}

/// One month in the year overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthSummary {
    pub month: u32,
    pub total: u32,
    /// Days of the month present in the activity map
    pub recorded_days: u32,
    pub intensity: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearView {
    pub year: i32,
    pub months: Vec<MonthSummary>,
}

pub fn days_in_month(year: i32, month: u32) -> AppResult<u32> {
    let first = first_of_month(year, month)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| AppError::Validation(format!("Year out of range: {}", year)))?;

    Ok((next - first).num_days() as u32)
}

fn first_of_month(year: i32, month: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::Validation(format!("Invalid month: {}-{}", year, month)))
}

/// Every day of a month with its count and intensity
pub fn month_view(year: i32, month: u32, activity: &ActivityMap, today: NaiveDate) -> AppResult<MonthView> {
    let first = first_of_month(year, month)?;
    let leading_blanks = first.weekday().num_days_from_sunday();

    let days = first
        .iter_days()
        .take(days_in_month(year, month)? as usize)
        .map(|date| {
            let count = activity.get(&date).copied().unwrap_or(0);
            DayCell {
                date,
                day: date.day(),
                count,
                intensity: intensity(count),
                is_today: date == today,
            }
        })
        .collect();

    Ok(MonthView {
        year,
        month,
        leading_blanks,
        days,
    })
}

/// Per-month totals for a year.
///
/// A month's intensity comes from the mean over its recorded days only,
/// rounded to the nearest integer.
pub fn year_view(year: i32, activity: &ActivityMap) -> AppResult<YearView> {
    let months = (1..=12)
        .map(|month| {
            let first = first_of_month(year, month)?;
            let last = first + chrono::Duration::days(days_in_month(year, month)? as i64 - 1);

            let (total, recorded_days) = activity
                .range(first..=last)
                .fold((0u32, 0u32), |(total, days), (_, &count)| (total + count, days + 1));

            let mean = if recorded_days == 0 {
                0
            } else {
                (total as f64 / recorded_days as f64).round() as u32
            };

            Ok(MonthSummary {
                month,
                total,
                recorded_days,
                intensity: intensity(mean),
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(YearView { year, months })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_intensity_buckets() {
        let buckets: Vec<u8> = [0, 1, 2, 3, 4, 7, 100].into_iter().map(intensity).collect();
        assert_eq!(buckets, vec![0, 1, 2, 3, 4, 4, 4]);
    }

    #[test]
    fn test_month_view_layout() {
        // 1 November 2025 is a Saturday
        let mut activity = ActivityMap::new();
        activity.insert(date(2025, 11, 3), 4);
        activity.insert(date(2025, 11, 4), 7);
        activity.insert(date(2025, 10, 31), 2);

        let view = month_view(2025, 11, &activity, date(2025, 11, 4)).unwrap();
        assert_eq!(view.leading_blanks, 6);
        assert_eq!(view.days.len(), 30);
        assert_eq!(view.days[0].count, 0);
        assert_eq!(view.days[2].intensity, 4);
        assert_eq!(view.days[3].intensity, 4);
        assert!(view.days[3].is_today);
        assert!(!view.days[2].is_today);
        assert_eq!(view.cells().count(), 36);
        assert!(view.cells().next().unwrap().is_none());
    }

    #[test]
    fn test_month_view_february() {
        let leap = month_view(2024, 2, &ActivityMap::new(), date(2024, 1, 1)).unwrap();
        assert_eq!(leap.days.len(), 29);
        let plain = month_view(2025, 2, &ActivityMap::new(), date(2025, 1, 1)).unwrap();
        assert_eq!(plain.days.len(), 28);
        // 1 June 2025 is a Sunday
        assert_eq!(month_view(2025, 6, &ActivityMap::new(), date(2025, 1, 1)).unwrap().leading_blanks, 0);
    }

    #[test]
    fn test_month_view_rejects_bad_month() {
        assert!(month_view(2025, 13, &ActivityMap::new(), date(2025, 1, 1)).is_err());
    }

    #[test]
    fn test_year_view_uses_mean_of_recorded_days() {
        let mut activity = ActivityMap::new();
        activity.insert(date(2025, 3, 10), 2);
        activity.insert(date(2025, 3, 20), 4);
        activity.insert(date(2025, 7, 1), 1);
        activity.insert(date(2025, 7, 2), 2);
        activity.insert(date(2024, 3, 5), 9);

        let view = year_view(2025, &activity).unwrap();
        assert_eq!(view.months.len(), 12);

        let march = &view.months[2];
        assert_eq!(march.total, 6);
        assert_eq!(march.recorded_days, 2);
        assert_eq!(march.intensity, 3);

        // mean 1.5 rounds up
        assert_eq!(view.months[6].intensity, 2);
        assert_eq!(view.months[0].intensity, 0);
        assert_eq!(view.months[0].total, 0);
    }
}
