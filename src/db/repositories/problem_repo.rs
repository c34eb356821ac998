//! Problem repository
//!
//! Every write takes a generic executor so the same statements run against
//! the pool or inside a transaction.

use sqlx::{PgExecutor, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        ChildRows, NewExample, NewHint, NewProblem, NewSolution, NewTag, Problem, ProblemCompany,
        ProblemExample, ProblemHint, ProblemPattern, ProblemSolution,
    },
};

/// Summary row used by browsing lists
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProblemCardRow {
    pub slug: String,
    pub title: String,
    pub difficulty: String,
    pub patterns: Vec<String>,
    pub companies: Vec<String>,
}

/// Repository for problem database operations
pub struct ProblemRepository;

impl ProblemRepository {
    /// Insert the problem row and return it
    pub async fn create<'e, E: PgExecutor<'e>>(executor: E, row: &NewProblem) -> AppResult<Problem> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            INSERT INTO problems (title, slug, difficulty, problem_statement, constraints, created_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&row.title)
        .bind(&row.slug)
        .bind(row.difficulty.as_str())
        .bind(&row.problem_statement)
        .bind(&row.constraints)
        .bind(row.created_by)
        .fetch_one(executor)
        .await?;

        Ok(problem)
    }

    /// Find problem by slug
    pub async fn find_by_slug<'e, E: PgExecutor<'e>>(executor: E, slug: &str) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE slug = $1"#)
            .bind(slug)
            .fetch_optional(executor)
            .await?;

        Ok(problem)
    }

    /// Delete problem; dependents go with it through cascading keys
    pub async fn delete<'e, E: PgExecutor<'e>>(executor: E, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM problems WHERE id = $1"#)
            .bind(id)
            .execute(executor)
            .await?;

        Ok(())
    }

    /// Bulk insert one batch of dependent rows
    pub async fn insert_children<'e, E: PgExecutor<'e>>(executor: E, rows: &ChildRows) -> AppResult<u64> {
        if rows.is_empty() {
            return Ok(0);
        }

        let mut builder = match rows {
            ChildRows::Tags(tags) => Self::tags_query(tags),
            ChildRows::Patterns(links) => Self::patterns_query(links),
            ChildRows::Companies(links) => Self::companies_query(links),
            ChildRows::Examples(examples) => Self::examples_query(examples),
            ChildRows::Hints(hints) => Self::hints_query(hints),
            ChildRows::Solutions(solutions) => Self::solutions_query(solutions),
        };

        let result = builder.build().execute(executor).await?;
        Ok(result.rows_affected())
    }

    fn tags_query(rows: &[NewTag]) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("INSERT INTO problem_tags (problem_id, tag) ");
        builder.push_values(rows, |mut b, row| {
            b.push_bind(row.problem_id).push_bind(row.tag.clone());
        });
        builder
    }

    fn patterns_query(rows: &[ProblemPattern]) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("INSERT INTO problem_patterns (problem_id, pattern_id) ");
        builder.push_values(rows, |mut b, row| {
            b.push_bind(row.problem_id).push_bind(row.pattern_id);
        });
        builder
    }

    fn companies_query(rows: &[ProblemCompany]) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("INSERT INTO problem_companies (problem_id, company_id) ");
        builder.push_values(rows, |mut b, row| {
            b.push_bind(row.problem_id).push_bind(row.company_id);
        });
        builder
    }

    fn examples_query(rows: &[NewExample]) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(
            "INSERT INTO problem_examples (problem_id, input, output, explanation, order_index) ",
        );
        builder.push_values(rows, |mut b, row| {
            b.push_bind(row.problem_id)
                .push_bind(row.input.clone())
                .push_bind(row.output.clone())
                .push_bind(row.explanation.clone())
                .push_bind(row.order_index);
        });
        builder
    }

    fn hints_query(rows: &[NewHint]) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("INSERT INTO problem_hints (problem_id, hint_text, order_index) ");
        builder.push_values(rows, |mut b, row| {
            b.push_bind(row.problem_id)
                .push_bind(row.hint_text.clone())
                .push_bind(row.order_index);
        });
        builder
    }

    fn solutions_query(rows: &[NewSolution]) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(
            r#"INSERT INTO problem_solutions (
                problem_id, approach_level, title, description, time_complexity,
                space_complexity, java_code, cpp_code, python_code, order_index
            ) "#,
        );
        builder.push_values(rows, |mut b, row| {
            b.push_bind(row.problem_id)
                .push_bind(row.approach_level.as_str())
                .push_bind(row.title.clone())
                .push_bind(row.description.clone())
                .push_bind(row.time_complexity.clone())
                .push_bind(row.space_complexity.clone())
                .push_bind(row.java_code.clone())
                .push_bind(row.cpp_code.clone())
                .push_bind(row.python_code.clone())
                .push_bind(row.order_index);
        });
        builder
    }

    /// List problem cards, optionally narrowed by difficulty, pattern slug or company slug
    pub async fn list_cards(
        pool: &PgPool,
        difficulty: Option<&str>,
        pattern_slug: Option<&str>,
        company_slug: Option<&str>,
    ) -> AppResult<Vec<ProblemCardRow>> {
        let rows = sqlx::query_as::<_, ProblemCardRow>(
            r#"
            SELECT
                p.slug,
                p.title,
                p.difficulty,
                ARRAY(
                    SELECT pt.name FROM problem_patterns pp
                    JOIN patterns pt ON pt.id = pp.pattern_id
                    WHERE pp.problem_id = p.id
                    ORDER BY pt.name
                ) AS patterns,
                ARRAY(
                    SELECT c.name FROM problem_companies pc
                    JOIN companies c ON c.id = pc.company_id
                    WHERE pc.problem_id = p.id
                    ORDER BY c.name
                ) AS companies
            FROM problems p
            WHERE
                ($1::text IS NULL OR p.difficulty = $1)
                AND ($2::text IS NULL OR EXISTS (
                    SELECT 1 FROM problem_patterns pp
                    JOIN patterns pt ON pt.id = pp.pattern_id
                    WHERE pp.problem_id = p.id AND pt.slug = $2
                ))
                AND ($3::text IS NULL OR EXISTS (
                    SELECT 1 FROM problem_companies pc
                    JOIN companies c ON c.id = pc.company_id
                    WHERE pc.problem_id = p.id AND c.slug = $3
                ))
            ORDER BY p.created_at DESC
            "#,
        )
        .bind(difficulty)
        .bind(pattern_slug)
        .bind(company_slug)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Count problems per difficulty
    pub async fn difficulty_counts(pool: &PgPool) -> AppResult<Vec<(String, i64)>> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"SELECT difficulty, COUNT(*) FROM problems GROUP BY difficulty"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Tags of a problem
    pub async fn get_tags(pool: &PgPool, problem_id: &Uuid) -> AppResult<Vec<String>> {
        let tags: Vec<String> = sqlx::query_scalar(r#"SELECT tag FROM problem_tags WHERE problem_id = $1 ORDER BY tag"#)
            .bind(problem_id)
            .fetch_all(pool)
            .await?;

        Ok(tags)
    }

    /// Pattern and company names linked to a problem
    pub async fn get_taxonomy_names(pool: &PgPool, problem_id: &Uuid) -> AppResult<(Vec<String>, Vec<String>)> {
        let patterns: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT pt.name FROM problem_patterns pp
            JOIN patterns pt ON pt.id = pp.pattern_id
            WHERE pp.problem_id = $1
            ORDER BY pt.name
            "#,
        )
        .bind(problem_id)
        .fetch_all(pool)
        .await?;

        let companies: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT c.name FROM problem_companies pc
            JOIN companies c ON c.id = pc.company_id
            WHERE pc.problem_id = $1
            ORDER BY c.name
            "#,
        )
        .bind(problem_id)
        .fetch_all(pool)
        .await?;

        Ok((patterns, companies))
    }

    /// Examples of a problem in display order
    pub async fn get_examples(pool: &PgPool, problem_id: &Uuid) -> AppResult<Vec<ProblemExample>> {
        let examples = sqlx::query_as::<_, ProblemExample>(
            r#"SELECT * FROM problem_examples WHERE problem_id = $1 ORDER BY order_index"#,
        )
        .bind(problem_id)
        .fetch_all(pool)
        .await?;

        Ok(examples)
    }

    /// Hints of a problem in display order
    pub async fn get_hints(pool: &PgPool, problem_id: &Uuid) -> AppResult<Vec<ProblemHint>> {
        let hints = sqlx::query_as::<_, ProblemHint>(
            r#"SELECT * FROM problem_hints WHERE problem_id = $1 ORDER BY order_index"#,
        )
        .bind(problem_id)
        .fetch_all(pool)
        .await?;

        Ok(hints)
    }

    /// Solutions of a problem in display order
    pub async fn get_solutions(pool: &PgPool, problem_id: &Uuid) -> AppResult<Vec<ProblemSolution>> {
        let solutions = sqlx::query_as::<_, ProblemSolution>(
            r#"SELECT * FROM problem_solutions WHERE problem_id = $1 ORDER BY order_index"#,
        )
        .bind(problem_id)
        .fetch_all(pool)
        .await?;

        Ok(solutions)
    }
}
