//! Pattern, company and difficulty browsing handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Catalogue routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/patterns", get(handler::list_patterns))
        .route("/patterns/{slug}", get(handler::pattern_problems))
        .route("/companies", get(handler::list_companies))
        .route("/companies/{slug}", get(handler::company_problems))
        .route("/difficulties", get(handler::list_difficulties))
}
