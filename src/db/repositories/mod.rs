//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod activity_repo;
pub mod problem_repo;
pub mod taxonomy_repo;
pub mod user_repo;

pub use activity_repo::ActivityRepository;
pub use problem_repo::{ProblemCardRow, ProblemRepository};
pub use taxonomy_repo::{TaxonomyCountRow, TaxonomyRepository};
pub use user_repo::UserRepository;
