//! Catalogue handler implementations

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    catalog::{category_title, ProblemFilter},
    error::AppResult,
    state::AppState,
};

use super::response::{CategoryListResponse, CategoryProblemsResponse, DifficultyListResponse};

pub async fn list_patterns(State(state): State<AppState>) -> AppResult<Json<CategoryListResponse>> {
    let categories = state.catalog().list_patterns().await?;
    Ok(Json(CategoryListResponse { categories }))
}

/// Problems under one pattern
pub async fn pattern_problems(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<CategoryProblemsResponse>> {
    let catalog = state.catalog();
    let known = catalog.list_patterns().await?;
    let filter = ProblemFilter {
        pattern: Some(slug.clone()),
        ..Default::default()
    };
    let problems = catalog.list_problems(&filter).await?;

    Ok(Json(CategoryProblemsResponse {
        title: category_title(&slug, &known),
        slug,
        problems,
    }))
}

pub async fn list_companies(State(state): State<AppState>) -> AppResult<Json<CategoryListResponse>> {
    let categories = state.catalog().list_companies().await?;
    Ok(Json(CategoryListResponse { categories }))
}

/// Problems asked by one company
pub async fn company_problems(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<CategoryProblemsResponse>> {
    let catalog = state.catalog();
    let known = catalog.list_companies().await?;
    let filter = ProblemFilter {
        company: Some(slug.clone()),
        ..Default::default()
    };
    let problems = catalog.list_problems(&filter).await?;

    Ok(Json(CategoryProblemsResponse {
        title: category_title(&slug, &known),
        slug,
        problems,
    }))
}

pub async fn list_difficulties(State(state): State<AppState>) -> AppResult<Json<DifficultyListResponse>> {
    let difficulties = state.catalog().difficulty_counts().await?;
    Ok(Json(DifficultyListResponse { difficulties }))
}
