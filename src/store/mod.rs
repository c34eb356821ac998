//! Backend collaborator seams
//!
//! Core components reach the backend only through these traits. The
//! Postgres store implements all of them; tests swap in mocks or the
//! in-memory store from `test_utils`.

pub mod postgres;

pub use postgres::PgStore;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    authoring::{plan::SubmissionPlan, submit::insert_sequentially},
    error::AppResult,
    models::{ActivityMap, ChildRows, NewProblem, Problem, Role, Taxonomy, TaxonomyEntry},
};

/// Insert and lookup operations used by the authoring form
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Insert the parent problem row
    async fn insert_problem(&self, row: &NewProblem) -> AppResult<Problem>;

    /// Bulk insert one batch of dependent rows
    async fn insert_rows(&self, rows: &ChildRows) -> AppResult<u64>;

    /// Remove a problem and everything that references it
    async fn delete_problem(&self, id: Uuid) -> AppResult<()>;

    async fn find_problem_by_slug(&self, slug: &str) -> AppResult<Option<Problem>>;

    /// Patterns or companies ordered by name
    async fn select_ordered(&self, taxonomy: Taxonomy) -> AppResult<Vec<TaxonomyEntry>>;

    /// Persist a whole submission.
    ///
    /// The default runs the ordered insert sequence and deletes the parent
    /// row again if a dependent insert fails. Stores with transactions
    /// override it to commit all rows or none.
    async fn insert_submission(&self, plan: &SubmissionPlan) -> AppResult<Problem> {
        insert_sequentially(self, plan).await
    }
}

/// Role existence checks
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleStore: Send + Sync {
    async fn query_role(&self, user_id: Uuid, role: Role) -> AppResult<bool>;
}

/// Per-day solve counts
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Count one solve on `day`, returning the day's new total
    async fn record_solve(&self, user_id: Uuid, day: NaiveDate) -> AppResult<u32>;

    async fn activity(&self, user_id: Uuid) -> AppResult<ActivityMap>;
}
