//! Problem model

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Runs of characters that cannot appear in a slug
static NON_SLUG_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern is valid"));

/// Problem database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Problem {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub difficulty: String,
    pub problem_statement: String,
    pub constraints: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Problem {
    /// Parsed difficulty, falling back to medium for unknown values
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty.parse().unwrap_or_default()
    }
}

/// Problem row as written by the authoring submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProblem {
    pub title: String,
    pub slug: String,
    pub difficulty: Difficulty,
    pub problem_statement: String,
    pub constraints: Option<String>,
    pub created_by: Option<Uuid>,
}

/// Problem difficulty levels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Capitalised label used by browsing views
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

/// Derive a URL-safe slug from a title.
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into a
/// single hyphen and strips a leading or trailing hyphen. Applying it to an
/// existing slug returns the slug unchanged.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    NON_SLUG_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Two Sum!"), "two-sum");
        assert_eq!(slugify("3Sum"), "3sum");
        assert_eq!(slugify("Best Time to Buy & Sell Stock II"), "best-time-to-buy-sell-stock-ii");
    }

    #[test]
    fn test_slugify_trims_and_collapses() {
        assert_eq!(slugify("  --Hello,   World--  "), "hello-world");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("Café au lait"), "caf-au-lait");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        let titles = [
            "Two Sum!",
            "LRU Cache (Design)",
            "  a  b  ",
            "Ünïcödé Tïtle",
            "already-a-slug",
            "--x--y--",
            "Merge k Sorted Lists",
        ];

        for title in titles {
            let once = slugify(title);
            assert_eq!(slugify(&once), once, "not idempotent for {:?}", title);
            assert!(!once.starts_with('-'));
            assert!(!once.ends_with('-'));
            assert!(!once.contains("--"));
        }
    }

    #[test]
    fn test_difficulty_parsing_and_default() {
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("expert".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        assert_eq!(Difficulty::Easy.to_string(), "easy");
    }
}
