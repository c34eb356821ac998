//! Pattern and company repository

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Taxonomy, TaxonomyEntry},
};

/// Taxonomy entry with the number of linked problems
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TaxonomyCountRow {
    pub name: String,
    pub slug: String,
    pub problem_count: i64,
}

/// Repository for pattern and company lookups
pub struct TaxonomyRepository;

impl TaxonomyRepository {
    /// All entries ordered by name
    pub async fn list_ordered(pool: &PgPool, taxonomy: Taxonomy) -> AppResult<Vec<TaxonomyEntry>> {
        let sql = match taxonomy {
            Taxonomy::Patterns => r#"SELECT id, name, slug FROM patterns ORDER BY name"#,
            Taxonomy::Companies => r#"SELECT id, name, slug FROM companies ORDER BY name"#,
        };

        let entries = sqlx::query_as::<_, TaxonomyEntry>(sql).fetch_all(pool).await?;
        Ok(entries)
    }

    /// All entries with their problem counts, ordered by name
    pub async fn list_with_counts(pool: &PgPool, taxonomy: Taxonomy) -> AppResult<Vec<TaxonomyCountRow>> {
        let sql = match taxonomy {
            Taxonomy::Patterns => {
                r#"
                SELECT t.name, t.slug, COUNT(j.problem_id) AS problem_count
                FROM patterns t
                LEFT JOIN problem_patterns j ON j.pattern_id = t.id
                GROUP BY t.id, t.name, t.slug
                ORDER BY t.name
                "#
            }
            Taxonomy::Companies => {
                r#"
                SELECT t.name, t.slug, COUNT(j.problem_id) AS problem_count
                FROM companies t
                LEFT JOIN problem_companies j ON j.company_id = t.id
                GROUP BY t.id, t.name, t.slug
                ORDER BY t.name
                "#
            }
        };

        let rows = sqlx::query_as::<_, TaxonomyCountRow>(sql).fetch_all(pool).await?;
        Ok(rows)
    }
}
