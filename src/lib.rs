//! DSA Sprint - interview practice content and progress service
//!
//! This library provides the core of the DSA Sprint practice app: problem
//! content authoring, admin access gating, streak tracking and problem
//! browsing, served to the mobile client over a JSON API.
//!
//! # Features
//!
//! - Problem authoring with one-shot multi-table submission
//! - Session restoration and admin role gating
//! - Daily solve calendar, streaks and badges
//! - Pattern, company and difficulty browsing
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic (`authoring`, `access`, `progress`, `services`)
//! - **Store**: Backend seams and their Postgres implementation
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod access;
pub mod authoring;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod progress;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
