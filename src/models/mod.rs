//! Domain models
//!
//! This module contains all domain models used throughout the application.
//! `Problem` is the aggregate root; every other content row references one.

pub mod activity;
pub mod content;
pub mod problem;
pub mod taxonomy;
pub mod user;

pub use activity::*;
pub use content::*;
pub use problem::*;
pub use taxonomy::*;
pub use user::*;
