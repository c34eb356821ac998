//! Pattern and company taxonomy

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::tables;

/// A pattern or company as listed in the authoring checklists
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

/// Which taxonomy table to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Taxonomy {
    Patterns,
    Companies,
}

impl Taxonomy {
    pub fn table(&self) -> &'static str {
        match self {
            Self::Patterns => tables::PATTERNS,
            Self::Companies => tables::COMPANIES,
        }
    }
}

/// Problem ⇄ pattern join row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemPattern {
    pub problem_id: Uuid,
    pub pattern_id: Uuid,
}

/// Problem ⇄ company join row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemCompany {
    pub problem_id: Uuid,
    pub company_id: Uuid,
}
