//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Username minimum length
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 32;

/// Length of the random state token attached to OAuth redirects
pub const OAUTH_STATE_LENGTH: usize = 32;

/// OAuth providers the sign-in surface offers
pub mod oauth_providers {
    pub const GOOGLE: &str = "google";
    pub const FACEBOOK: &str = "facebook";

    pub const ALL: &[&str] = &[GOOGLE, FACEBOOK];
}

/// Default OAuth authorize endpoints
pub const DEFAULT_GOOGLE_AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const DEFAULT_FACEBOOK_AUTHORIZE_URL: &str = "https://www.facebook.com/v19.0/dialog/oauth";
pub const DEFAULT_OAUTH_REDIRECT_URL: &str = "http://localhost:8080/home";

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const MODERATOR: &str = "moderator";
    pub const USER: &str = "user";
}

// =============================================================================
// CONTENT TABLES
// =============================================================================

/// Backend table names touched by the authoring submission
pub mod tables {
    pub const PROBLEMS: &str = "problems";
    pub const PROBLEM_TAGS: &str = "problem_tags";
    pub const PROBLEM_PATTERNS: &str = "problem_patterns";
    pub const PROBLEM_COMPANIES: &str = "problem_companies";
    pub const PROBLEM_EXAMPLES: &str = "problem_examples";
    pub const PROBLEM_HINTS: &str = "problem_hints";
    pub const PROBLEM_SOLUTIONS: &str = "problem_solutions";
    pub const PATTERNS: &str = "patterns";
    pub const COMPANIES: &str = "companies";
}

// =============================================================================
// AUTHORING
// =============================================================================

/// Default title of the "Good" solution slot
pub const DEFAULT_GOOD_SOLUTION_TITLE: &str = "Brute Force";

/// Default title of the "Better" solution slot
pub const DEFAULT_BETTER_SOLUTION_TITLE: &str = "";

/// Default title of the "Best" solution slot
pub const DEFAULT_BEST_SOLUTION_TITLE: &str = "Optimal";

/// Notification shown when a backend error carries no message
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Notification shown after a successful authoring submission
pub const PROBLEM_CREATED_MESSAGE: &str = "Problem created successfully";

/// Notification shown when required authoring fields are blank
pub const REQUIRED_FIELDS_MESSAGE: &str = "Title and Problem Statement are required";

// =============================================================================
// ACCESS GATE
// =============================================================================

/// Where unauthenticated actors are sent
pub const AUTH_ENTRY_PATH: &str = "/auth";

/// Where authenticated non-admins are sent
pub const HOME_PATH: &str = "/home";

// =============================================================================
// PROGRESS
// =============================================================================

/// Highest intensity bucket; counts at or above it are capped
pub const MAX_INTENSITY_LEVEL: u8 = 4;

/// Streak badge ladder: (id, name, days required), ascending
pub const STREAK_BADGES: &[(&str, &str, u32)] = &[
    ("starter", "Starter", 3),
    ("consistent", "Consistent", 7),
    ("dedicated", "Dedicated", 14),
    ("champion", "Champion", 30),
    ("legend", "Legend", 60),
    ("master", "Master", 100),
];

/// Date key format for activity maps
pub const ACTIVITY_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum problem title length
pub const MAX_PROBLEM_TITLE_LENGTH: u64 = 256;

/// Maximum problem statement length
pub const MAX_PROBLEM_STATEMENT_LENGTH: u64 = 65535;
