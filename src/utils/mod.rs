//! Utility functions

pub mod crypto;
pub mod time;
pub mod validation;

pub use crypto::generate_secure_token;
pub use time::{now_utc, today_utc, year_month};
pub use validation::{
    validate_email, validate_oauth_provider, validate_password, validate_tag,
    validate_username,
};
