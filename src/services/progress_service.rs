//! Progress service

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::{
    error::AppResult,
    progress::{badges, current_streak, longest_streak, month_view, year_view, Badge, MonthView, YearView},
    store::ProgressStore,
};

/// Streak numbers and badges for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_solved: u32,
    pub solved_this_month: u32,
    pub badges: Vec<Badge>,
}

/// Progress service for business logic
pub struct ProgressService;

impl ProgressService {
    /// Count one solve for the user on `day`
    pub async fn record_solve<S>(store: &S, user_id: Uuid, day: NaiveDate) -> AppResult<u32>
    where
        S: ProgressStore + ?Sized,
    {
        let solved_today = store.record_solve(user_id, day).await?;
        info!(user_id = %user_id, %day, solved_today, "Solve recorded");
        Ok(solved_today)
    }

    pub async fn summary<S>(store: &S, user_id: Uuid, today: NaiveDate) -> AppResult<ProgressSummary>
    where
        S: ProgressStore + ?Sized,
    {
        let activity = store.activity(user_id).await?;

        let current = current_streak(&activity, today);
        let longest = longest_streak(&activity);
        let solved_this_month = activity
            .iter()
            .filter(|(day, _)| day.year() == today.year() && day.month() == today.month())
            .map(|(_, count)| count)
            .sum();

        Ok(ProgressSummary {
            current_streak: current,
            longest_streak: longest,
            total_solved: activity.values().sum(),
            solved_this_month,
            badges: badges(current, longest),
        })
    }

    pub async fn calendar<S>(
        store: &S,
        user_id: Uuid,
        year: i32,
        month: u32,
        today: NaiveDate,
    ) -> AppResult<MonthView>
    where
        S: ProgressStore + ?Sized,
    {
        let activity = store.activity(user_id).await?;
        month_view(year, month, &activity, today)
    }

    pub async fn year<S>(store: &S, user_id: Uuid, year: i32) -> AppResult<YearView>
    where
        S: ProgressStore + ?Sized,
    {
        let activity = store.activity(user_id).await?;
        year_view(year, &activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AppError, store::MockProgressStore, test_utils::MemoryStore};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_record_solve_accumulates_per_day() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();
        let today = day(2025, 11, 20);

        assert_eq!(ProgressService::record_solve(&store, user, today).await.unwrap(), 1);
        assert_eq!(ProgressService::record_solve(&store, user, today).await.unwrap(), 2);
        assert_eq!(
            ProgressService::record_solve(&store, user, day(2025, 11, 21)).await.unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn test_summary() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();
        for d in [day(2025, 10, 30), day(2025, 10, 31), day(2025, 11, 1), day(2025, 11, 1)] {
            store.record_solve(user, d).await.unwrap();
        }
        store.record_solve(user, day(2025, 11, 3)).await.unwrap();

        let summary = ProgressService::summary(&store, user, day(2025, 11, 3)).await.unwrap();

        assert_eq!(summary.current_streak, 1);
        assert_eq!(summary.longest_streak, 3);
        assert_eq!(summary.total_solved, 5);
        assert_eq!(summary.solved_this_month, 3);
        assert!(summary.badges[0].unlocked);
        assert!(!summary.badges[0].active);
        assert!(!summary.badges[1].unlocked);
    }

    #[tokio::test]
    async fn test_summary_for_new_user() {
        let store = MemoryStore::new();
        let summary = ProgressService::summary(&store, Uuid::new_v4(), day(2025, 1, 1))
            .await
            .unwrap();

        assert_eq!(summary.current_streak, 0);
        assert_eq!(summary.total_solved, 0);
        assert!(summary.badges.iter().all(|b| !b.unlocked));
    }

    #[tokio::test]
    async fn test_calendar_rejects_bad_month_without_backend_error() {
        let store = MemoryStore::new();
        let err = ProgressService::calendar(&store, Uuid::new_v4(), 2025, 13, day(2025, 1, 1))
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let mut store = MockProgressStore::new();
        store
            .expect_activity()
            .returning(|_| Err(AppError::Backend("unavailable".to_string())));

        let err = ProgressService::year(&store, Uuid::new_v4(), 2025).await.unwrap_err();
        assert_eq!(err.user_message(), "unavailable");
    }
}
