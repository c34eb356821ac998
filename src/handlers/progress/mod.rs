//! Progress and streak handlers

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Progress routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/calendar", get(handler::get_calendar))
        .route("/year", get(handler::get_year))
        .route("/summary", get(handler::get_summary))
}
