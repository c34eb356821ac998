//! Problem handler implementations

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::info;
use validator::Validate;

use crate::{
    catalog::{ProblemDetail, ProblemFilter},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::ProgressService,
    state::AppState,
    utils::today_utc,
};

use super::{
    request::SubmitSolutionRequest,
    response::{ProblemListResponse, SubmitSolutionResponse},
};

/// List problems matching the query filter
pub async fn list_problems(
    State(state): State<AppState>,
    Query(filter): Query<ProblemFilter>,
) -> AppResult<Json<ProblemListResponse>> {
    let problems = state.catalog().list_problems(&filter).await?;

    Ok(Json(ProblemListResponse {
        total: problems.len(),
        problems,
    }))
}

/// Statement, examples, hints and solutions of one problem
pub async fn get_problem(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<ProblemDetail>> {
    state
        .catalog()
        .problem_detail(&slug)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Problem '{}' not found", slug)))
}

/// Accept a practice submission and count today's solve
pub async fn submit_solution(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(slug): Path<String>,
    Json(payload): Json<SubmitSolutionRequest>,
) -> AppResult<Json<SubmitSolutionResponse>> {
    payload.validate()?;

    if state.catalog().problem_detail(&slug).await?.is_none() {
        return Err(AppError::NotFound(format!("Problem '{}' not found", slug)));
    }

    let solved_today = ProgressService::record_solve(state.store().as_ref(), auth_user.id, today_utc()).await?;

    info!(
        user_id = %auth_user.id,
        slug = %slug,
        language = %payload.language,
        "Practice submission accepted"
    );

    Ok(Json(SubmitSolutionResponse {
        accepted: true,
        slug,
        solved_today,
    }))
}
