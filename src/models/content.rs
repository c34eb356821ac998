//! Problem content: tags, examples, hints and solutions

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::taxonomy::{ProblemCompany, ProblemPattern};
use crate::constants::tables;

/// Fixed three-tier classification of a solution's quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ApproachLevel {
    Good,
    Better,
    Best,
}

impl ApproachLevel {
    /// The triad in display order
    pub const ALL: [ApproachLevel; 3] = [ApproachLevel::Good, ApproachLevel::Better, ApproachLevel::Best];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Better => "Better",
            Self::Best => "Best",
        }
    }
}

impl std::fmt::Display for ApproachLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ApproachLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Good" => Ok(Self::Good),
            "Better" => Ok(Self::Better),
            "Best" => Ok(Self::Best),
            other => Err(format!("Unknown approach level: {}", other)),
        }
    }
}

/// Tag row to insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTag {
    pub problem_id: Uuid,
    pub tag: String,
}

/// Example row to insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewExample {
    pub problem_id: Uuid,
    pub input: String,
    pub output: String,
    pub explanation: Option<String>,
    pub order_index: i32,
}

/// Hint row to insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewHint {
    pub problem_id: Uuid,
    pub hint_text: String,
    pub order_index: i32,
}

/// Solution row to insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSolution {
    pub problem_id: Uuid,
    pub approach_level: ApproachLevel,
    pub title: String,
    pub description: String,
    pub time_complexity: String,
    pub space_complexity: String,
    pub java_code: Option<String>,
    pub cpp_code: Option<String>,
    pub python_code: Option<String>,
    pub order_index: i32,
}

/// Stored example
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ProblemExample {
    pub id: Uuid,
    pub problem_id: Uuid,
    pub input: String,
    pub output: String,
    pub explanation: Option<String>,
    pub order_index: i32,
}

/// Stored hint
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ProblemHint {
    pub id: Uuid,
    pub problem_id: Uuid,
    pub hint_text: String,
    pub order_index: i32,
}

/// Stored solution
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ProblemSolution {
    pub id: Uuid,
    pub problem_id: Uuid,
    pub approach_level: String,
    pub title: String,
    pub description: String,
    pub time_complexity: String,
    pub space_complexity: String,
    pub java_code: Option<String>,
    pub cpp_code: Option<String>,
    pub python_code: Option<String>,
    pub order_index: i32,
}

/// One bulk insert into a table that depends on a problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildRows {
    Tags(Vec<NewTag>),
    Patterns(Vec<ProblemPattern>),
    Companies(Vec<ProblemCompany>),
    Examples(Vec<NewExample>),
    Hints(Vec<NewHint>),
    Solutions(Vec<NewSolution>),
}

impl ChildRows {
    /// Target table of this batch
    pub fn table(&self) -> &'static str {
        match self {
            Self::Tags(_) => tables::PROBLEM_TAGS,
            Self::Patterns(_) => tables::PROBLEM_PATTERNS,
            Self::Companies(_) => tables::PROBLEM_COMPANIES,
            Self::Examples(_) => tables::PROBLEM_EXAMPLES,
            Self::Hints(_) => tables::PROBLEM_HINTS,
            Self::Solutions(_) => tables::PROBLEM_SOLUTIONS,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Tags(rows) => rows.len(),
            Self::Patterns(rows) => rows.len(),
            Self::Companies(rows) => rows.len(),
            Self::Examples(rows) => rows.len(),
            Self::Hints(rows) => rows.len(),
            Self::Solutions(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
