//! Postgres-backed store

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::{debug, warn};
use uuid::Uuid;

use super::{ContentStore, ProgressStore, RoleStore};
use crate::{
    authoring::plan::SubmissionPlan,
    catalog::{
        constraint_lines, CategorySummary, DifficultyCount, ExampleView, ProblemCard,
        ProblemCatalog, ProblemDetail, ProblemFilter, SolutionView,
    },
    db::repositories::{
        ActivityRepository, ProblemCardRow, ProblemRepository, TaxonomyCountRow,
        TaxonomyRepository, UserRepository,
    },
    error::{AppError, AppResult},
    models::{
        ActivityMap, ApproachLevel, ChildRows, Difficulty, NewProblem, Problem, ProblemSolution,
        Role, Taxonomy, TaxonomyEntry,
    },
};

/// Store over the application's connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ContentStore for PgStore {
    async fn insert_problem(&self, row: &NewProblem) -> AppResult<Problem> {
        ProblemRepository::create(&self.pool, row).await
    }

    async fn insert_rows(&self, rows: &ChildRows) -> AppResult<u64> {
        ProblemRepository::insert_children(&self.pool, rows).await
    }

    async fn delete_problem(&self, id: Uuid) -> AppResult<()> {
        ProblemRepository::delete(&self.pool, &id).await
    }

    async fn find_problem_by_slug(&self, slug: &str) -> AppResult<Option<Problem>> {
        ProblemRepository::find_by_slug(&self.pool, slug).await
    }

    async fn select_ordered(&self, taxonomy: Taxonomy) -> AppResult<Vec<TaxonomyEntry>> {
        TaxonomyRepository::list_ordered(&self.pool, taxonomy).await
    }

    /// All rows commit together or not at all
    async fn insert_submission(&self, plan: &SubmissionPlan) -> AppResult<Problem> {
        let mut tx = self.pool.begin().await?;

        let problem = ProblemRepository::create(&mut *tx, &plan.problem).await?;

        for batch in plan.child_batches(problem.id) {
            if let Err(e) = ProblemRepository::insert_children(&mut *tx, &batch).await {
                warn!(
                    slug = %problem.slug,
                    table = batch.table(),
                    error = %e,
                    "Dependent insert failed, rolling back submission"
                );
                return Err(e);
            }
        }

        tx.commit().await?;

        debug!(problem_id = %problem.id, "Submission committed");
        Ok(problem)
    }
}

#[async_trait]
impl RoleStore for PgStore {
    async fn query_role(&self, user_id: Uuid, role: Role) -> AppResult<bool> {
        UserRepository::has_role(&self.pool, &user_id, role).await
    }
}

#[async_trait]
impl ProgressStore for PgStore {
    async fn record_solve(&self, user_id: Uuid, day: NaiveDate) -> AppResult<u32> {
        let count = ActivityRepository::increment(&self.pool, &user_id, day).await?;
        Ok(count.max(0) as u32)
    }

    async fn activity(&self, user_id: Uuid) -> AppResult<ActivityMap> {
        let rows = ActivityRepository::list_for_user(&self.pool, &user_id).await?;
        Ok(rows.into_iter().map(<(NaiveDate, u32)>::from).collect())
    }
}

fn summary(row: TaxonomyCountRow) -> CategorySummary {
    CategorySummary {
        name: row.name,
        slug: row.slug,
        problem_count: row.problem_count.max(0) as u32,
    }
}

fn card(row: ProblemCardRow) -> ProblemCard {
    ProblemCard {
        difficulty: row.difficulty.parse().unwrap_or_default(),
        slug: row.slug,
        title: row.title,
        patterns: row.patterns,
        companies: row.companies,
    }
}

fn solution_view(row: ProblemSolution) -> AppResult<SolutionView> {
    let approach_level = row
        .approach_level
        .parse::<ApproachLevel>()
        .map_err(AppError::Database)?;

    Ok(SolutionView {
        approach_level,
        title: row.title,
        description: row.description,
        time_complexity: row.time_complexity,
        space_complexity: row.space_complexity,
        java_code: row.java_code,
        cpp_code: row.cpp_code,
        python_code: row.python_code,
    })
}

#[async_trait]
impl ProblemCatalog for PgStore {
    async fn list_patterns(&self) -> AppResult<Vec<CategorySummary>> {
        let rows = TaxonomyRepository::list_with_counts(&self.pool, Taxonomy::Patterns).await?;
        Ok(rows.into_iter().map(summary).collect())
    }

    async fn list_companies(&self) -> AppResult<Vec<CategorySummary>> {
        let rows = TaxonomyRepository::list_with_counts(&self.pool, Taxonomy::Companies).await?;
        Ok(rows.into_iter().map(summary).collect())
    }

    async fn difficulty_counts(&self) -> AppResult<Vec<DifficultyCount>> {
        let counts: HashMap<String, i64> = ProblemRepository::difficulty_counts(&self.pool)
            .await?
            .into_iter()
            .collect();

        Ok(Difficulty::ALL
            .iter()
            .map(|&difficulty| DifficultyCount {
                difficulty,
                label: difficulty.label().to_string(),
                problem_count: counts
                    .get(difficulty.as_str())
                    .copied()
                    .unwrap_or(0)
                    .max(0) as u32,
            })
            .collect())
    }

    async fn list_problems(&self, filter: &ProblemFilter) -> AppResult<Vec<ProblemCard>> {
        let rows = ProblemRepository::list_cards(
            &self.pool,
            filter.difficulty.as_ref().map(Difficulty::as_str),
            filter.pattern.as_deref(),
            filter.company.as_deref(),
        )
        .await?;

        Ok(rows
            .into_iter()
            .map(card)
            .filter(|c| filter.matches_search(c))
            .collect())
    }

    async fn problem_detail(&self, slug: &str) -> AppResult<Option<ProblemDetail>> {
        let Some(problem) = ProblemRepository::find_by_slug(&self.pool, slug).await? else {
            return Ok(None);
        };

        let (tags, (patterns, companies), examples, hints, solutions) = futures::try_join!(
            ProblemRepository::get_tags(&self.pool, &problem.id),
            ProblemRepository::get_taxonomy_names(&self.pool, &problem.id),
            ProblemRepository::get_examples(&self.pool, &problem.id),
            ProblemRepository::get_hints(&self.pool, &problem.id),
            ProblemRepository::get_solutions(&self.pool, &problem.id),
        )?;
        let solutions = solutions
            .into_iter()
            .map(solution_view)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Some(ProblemDetail {
            difficulty: problem.difficulty(),
            constraints: constraint_lines(problem.constraints.as_deref()),
            slug: problem.slug,
            title: problem.title,
            problem_statement: problem.problem_statement,
            examples: examples
                .into_iter()
                .map(|e| ExampleView {
                    input: e.input,
                    output: e.output,
                    explanation: e.explanation,
                })
                .collect(),
            hints: hints.into_iter().map(|h| h.hint_text).collect(),
            solutions,
            tags,
            patterns,
            companies,
        }))
    }
}
