//! Daily solve activity

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{
    constants::ACTIVITY_DATE_FORMAT,
    error::{AppError, AppResult},
};

/// Problems solved per calendar day
pub type ActivityMap = BTreeMap<NaiveDate, u32>;

/// Stored activity row
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ActivityRow {
    pub day: NaiveDate,
    pub solved_count: i32,
}

/// Build an activity map from `YYYY-MM-DD` keyed counts.
///
/// Repeated dates are summed.
pub fn activity_from_iso<I, K>(entries: I) -> AppResult<ActivityMap>
where
    I: IntoIterator<Item = (K, u32)>,
    K: AsRef<str>,
{
    let mut map = ActivityMap::new();
    for (key, count) in entries {
        let key = key.as_ref();
        let day = NaiveDate::parse_from_str(key, ACTIVITY_DATE_FORMAT)
            .map_err(|_| AppError::Validation(format!("Invalid activity date: {}", key)))?;
        *map.entry(day).or_default() += count;
    }
    Ok(map)
}

impl From<ActivityRow> for (NaiveDate, u32) {
    fn from(row: ActivityRow) -> Self {
        (row.day, row.solved_count.max(0) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_from_iso() {
        let map = activity_from_iso([("2025-11-01", 2), ("2025-11-03", 1), ("2025-11-01", 1)]).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&NaiveDate::from_ymd_opt(2025, 11, 1).unwrap()], 3);
    }

    #[test]
    fn test_activity_from_iso_rejects_bad_dates() {
        let err = activity_from_iso([("2025-13-01", 1)]).unwrap_err();
        assert!(err.is_validation());
    }
}
