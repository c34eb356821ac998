//! Business logic services

pub mod auth_service;
pub mod progress_service;

pub use auth_service::AuthService;
pub use progress_service::{ProgressService, ProgressSummary};
