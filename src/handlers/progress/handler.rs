//! Progress handler implementations

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    progress::{MonthView, YearView},
    services::{ProgressService, ProgressSummary},
    state::AppState,
    utils::{today_utc, year_month},
};

use super::request::{CalendarQuery, YearQuery};

/// Month grid of the caller's solves
pub async fn get_calendar(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<CalendarQuery>,
) -> AppResult<Json<MonthView>> {
    let today = today_utc();
    let (current_year, current_month) = year_month(today);

    let view = ProgressService::calendar(
        state.store().as_ref(),
        auth_user.id,
        query.year.unwrap_or(current_year),
        query.month.unwrap_or(current_month),
        today,
    )
    .await?;

    Ok(Json(view))
}

/// Per-month overview of the caller's year
pub async fn get_year(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<YearQuery>,
) -> AppResult<Json<YearView>> {
    let (current_year, _) = year_month(today_utc());
    let view = ProgressService::year(state.store().as_ref(), auth_user.id, query.year.unwrap_or(current_year)).await?;

    Ok(Json(view))
}

/// Streaks, totals and badges
pub async fn get_summary(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<ProgressSummary>> {
    let summary = ProgressService::summary(state.store().as_ref(), auth_user.id, today_utc()).await?;
    Ok(Json(summary))
}
