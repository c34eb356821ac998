//! Problem browsing read-models
//!
//! Views fetch everything they render through [`ProblemCatalog`], so the
//! built-in sample catalogue and the Postgres content tables are
//! interchangeable.

pub mod sample;

pub use sample::StaticCatalog;

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    error::AppResult,
    models::{ApproachLevel, Difficulty},
};

static AMPERSAND_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+&\s+").expect("separator pattern is valid"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// A pattern or company card with its problem count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub name: String,
    pub slug: String,
    pub problem_count: u32,
}

impl CategorySummary {
    pub fn new(name: &str, problem_count: u32) -> Self {
        Self {
            name: name.to_string(),
            slug: category_slug(name),
            problem_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyCount {
    pub difficulty: Difficulty,
    pub label: String,
    pub problem_count: u32,
}

/// Narrowing applied to problem lists; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProblemFilter {
    /// Pattern slug
    pub pattern: Option<String>,
    /// Company slug
    pub company: Option<String>,
    pub difficulty: Option<Difficulty>,
    /// Case-insensitive match on title or company name
    pub search: Option<String>,
}

impl ProblemFilter {
    pub fn matches(&self, card: &ProblemCard) -> bool {
        let pattern_ok = self
            .pattern
            .as_deref()
            .is_none_or(|slug| card.patterns.iter().any(|p| category_slug(p) == slug));
        let company_ok = self
            .company
            .as_deref()
            .is_none_or(|slug| card.companies.iter().any(|c| category_slug(c) == slug));
        let difficulty_ok = self.difficulty.is_none_or(|d| card.difficulty == d);

        pattern_ok && company_ok && difficulty_ok && self.matches_search(card)
    }

    pub fn matches_search(&self, card: &ProblemCard) -> bool {
        let Some(query) = self.search.as_deref().map(str::trim).filter(|q| !q.is_empty()) else {
            return true;
        };
        let query = query.to_lowercase();

        card.title.to_lowercase().contains(&query)
            || card.companies.iter().any(|c| c.to_lowercase().contains(&query))
    }
}

/// Problem as shown in lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemCard {
    pub slug: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub patterns: Vec<String>,
    pub companies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleView {
    pub input: String,
    pub output: String,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionView {
    pub approach_level: ApproachLevel,
    pub title: String,
    pub description: String,
    pub time_complexity: String,
    pub space_complexity: String,
    pub java_code: Option<String>,
    pub cpp_code: Option<String>,
    pub python_code: Option<String>,
}

/// Everything the problem, hints and solution screens show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetail {
    pub slug: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub problem_statement: String,
    pub constraints: Vec<String>,
    pub examples: Vec<ExampleView>,
    pub hints: Vec<String>,
    pub solutions: Vec<SolutionView>,
    pub tags: Vec<String>,
    pub patterns: Vec<String>,
    pub companies: Vec<String>,
}

/// Read access to browsable content
#[async_trait]
pub trait ProblemCatalog: Send + Sync {
    async fn list_patterns(&self) -> AppResult<Vec<CategorySummary>>;

    async fn list_companies(&self) -> AppResult<Vec<CategorySummary>>;

    /// Problem count per difficulty, easiest first
    async fn difficulty_counts(&self) -> AppResult<Vec<DifficultyCount>>;

    async fn list_problems(&self, filter: &ProblemFilter) -> AppResult<Vec<ProblemCard>>;

    async fn problem_detail(&self, slug: &str) -> AppResult<Option<ProblemDetail>>;
}

/// Browsing slug of a category name: "Arrays & Hashing" becomes "arrays-hashing"
pub fn category_slug(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let joined = AMPERSAND_SEPARATOR.replace_all(&lowered, "-");
    WHITESPACE_RUN.replace_all(&joined, "-").into_owned()
}

/// Heading for a category slug.
///
/// Uses the name of a known category with that slug, otherwise capitalises
/// each hyphen-separated word.
pub fn category_title(slug: &str, known: &[CategorySummary]) -> String {
    if let Some(category) = known.iter().find(|c| c.slug == slug) {
        return category.name.clone();
    }

    slug.split('-')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split stored constraint text into one constraint per line
pub fn constraint_lines(text: Option<&str>) -> Vec<String> {
    text.map(|t| {
        t.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, difficulty: Difficulty, pattern: &str, companies: &[&str]) -> ProblemCard {
        ProblemCard {
            slug: crate::models::slugify(title),
            title: title.to_string(),
            difficulty,
            patterns: vec![pattern.to_string()],
            companies: companies.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_category_slug() {
        assert_eq!(category_slug("Arrays & Hashing"), "arrays-hashing");
        assert_eq!(category_slug("Dynamic Programming"), "dynamic-programming");
        assert_eq!(category_slug("Goldman Sachs"), "goldman-sachs");
        assert_eq!(category_slug("Graphs"), "graphs");
    }

    #[test]
    fn test_category_title() {
        let known = vec![CategorySummary::new("Arrays & Hashing", 45)];
        assert_eq!(category_title("arrays-hashing", &known), "Arrays & Hashing");
        assert_eq!(category_title("two-pointers", &known), "Two Pointers");
        assert_eq!(category_title("", &known), "");
    }

    #[test]
    fn test_filter_matches() {
        let two_sum = card("Two Sum", Difficulty::Easy, "Arrays & Hashing", &["Amazon", "Google"]);

        assert!(ProblemFilter::default().matches(&two_sum));
        assert!(ProblemFilter {
            pattern: Some("arrays-hashing".to_string()),
            company: Some("google".to_string()),
            difficulty: Some(Difficulty::Easy),
            search: None,
        }
        .matches(&two_sum));
        assert!(!ProblemFilter {
            difficulty: Some(Difficulty::Hard),
            ..Default::default()
        }
        .matches(&two_sum));
        assert!(!ProblemFilter {
            company: Some("meta".to_string()),
            ..Default::default()
        }
        .matches(&two_sum));
    }

    #[test]
    fn test_search_matches_title_or_company() {
        let two_sum = card("Two Sum", Difficulty::Easy, "Arrays & Hashing", &["Amazon"]);
        let by = |q: &str| ProblemFilter {
            search: Some(q.to_string()),
            ..Default::default()
        };

        assert!(by("two").matches(&two_sum));
        assert!(by("AMAZON").matches(&two_sum));
        assert!(by("  ").matches(&two_sum));
        assert!(!by("anagram").matches(&two_sum));
    }

    #[test]
    fn test_constraint_lines() {
        assert_eq!(
            constraint_lines(Some("2 <= n\n\n  only one answer  ")),
            vec!["2 <= n".to_string(), "only one answer".to_string()]
        );
        assert!(constraint_lines(None).is_empty());
    }
}
