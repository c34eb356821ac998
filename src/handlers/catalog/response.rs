//! Catalogue response DTOs

use serde::Serialize;

use crate::catalog::{CategorySummary, DifficultyCount, ProblemCard};

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<CategorySummary>,
}

/// One pattern or company page
#[derive(Debug, Serialize)]
pub struct CategoryProblemsResponse {
    pub slug: String,
    pub title: String,
    pub problems: Vec<ProblemCard>,
}

#[derive(Debug, Serialize)]
pub struct DifficultyListResponse {
    pub difficulties: Vec<DifficultyCount>,
}
