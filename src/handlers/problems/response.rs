//! Problem response DTOs

use serde::Serialize;

use crate::catalog::ProblemCard;

/// Filtered problem list
#[derive(Debug, Serialize)]
pub struct ProblemListResponse {
    pub problems: Vec<ProblemCard>,
    pub total: usize,
}

/// Accepted practice submission
#[derive(Debug, Serialize)]
pub struct SubmitSolutionResponse {
    pub accepted: bool,
    pub slug: String,
    /// Solves recorded for the caller today, this one included
    pub solved_today: u32,
}
