//! Solve activity repository

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::ActivityRow};

/// Repository for per-day solve counts
pub struct ActivityRepository;

impl ActivityRepository {
    /// Add one solve on `day` and return the new count for that day
    pub async fn increment(pool: &PgPool, user_id: &Uuid, day: NaiveDate) -> AppResult<i32> {
        let count: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO user_activity (user_id, day, solved_count)
            VALUES ($1, $2, 1)
            ON CONFLICT (user_id, day)
            DO UPDATE SET solved_count = user_activity.solved_count + 1
            RETURNING solved_count
            "#,
        )
        .bind(user_id)
        .bind(day)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

    /// All recorded days for a user
    pub async fn list_for_user(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<ActivityRow>> {
        let rows = sqlx::query_as::<_, ActivityRow>(
            r#"SELECT day, solved_count FROM user_activity WHERE user_id = $1 ORDER BY day"#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}
