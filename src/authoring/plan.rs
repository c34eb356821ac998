//! Turning a filled-in form into the rows a submission writes

use uuid::Uuid;

use super::form::AuthoringForm;
use crate::{
    constants::REQUIRED_FIELDS_MESSAGE,
    error::{AppError, AppResult},
    models::{
        slugify, ApproachLevel, ChildRows, NewExample, NewHint, NewProblem, NewSolution, NewTag,
        ProblemCompany, ProblemPattern,
    },
};

/// Example that survived filtering, with its dense position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedExample {
    pub input: String,
    pub output: String,
    pub explanation: Option<String>,
    pub order_index: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedHint {
    pub hint_text: String,
    pub order_index: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedSolution {
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

/// Everything one authoring submission writes, before the problem id exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPlan {
    pub problem: NewProblem,
    pub tags: Vec<String>,
    pub pattern_ids: Vec<Uuid>,
    pub company_ids: Vec<Uuid>,
    pub examples: Vec<PlannedExample>,
    pub hints: Vec<PlannedHint>,
    pub solutions: Vec<PlannedSolution>,
}

impl SubmissionPlan {
    /// Validate the form and build the plan.
    ///
    /// Title and statement must be non-blank. Blank examples, hints and
    /// incomplete solutions are dropped and the survivors are numbered from
    /// zero without gaps.
    pub fn from_form(form: &AuthoringForm, created_by: Option<Uuid>) -> AppResult<Self> {
        if form.title.trim().is_empty() || form.problem_statement.trim().is_empty() {
            return Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        }

        let slug = slugify(&form.title);
        if slug.is_empty() {
            return Err(AppError::Validation(
                "Title must contain at least one letter or digit".to_string(),
            ));
        }

        let problem = NewProblem {
            title: form.title.clone(),
            slug,
            difficulty: form.difficulty,
            problem_statement: form.problem_statement.clone(),
            constraints: non_blank(&form.constraints),
            created_by,
        };

        let examples = form
            .examples()
            .iter()
            .filter(|e| !e.is_blank())
            .zip(0..)
            .map(|(e, order_index)| PlannedExample {
                input: e.input.clone(),
                output: e.output.clone(),
                explanation: non_blank(&e.explanation),
                order_index,
            })
            .collect();

        let hints = form
            .hints()
            .iter()
            .filter(|h| !h.trim().is_empty())
            .zip(0..)
            .map(|(h, order_index)| PlannedHint {
                hint_text: h.clone(),
                order_index,
            })
            .collect();

        let solutions = form
            .solutions()
            .iter()
            .filter(|s| s.is_complete())
            .zip(0..)
            .map(|(s, order_index)| PlannedSolution {
                approach_level: s.approach_level,
                title: s.title.clone(),
                description: s.description.clone(),
                time_complexity: s.time_complexity.clone(),
                space_complexity: s.space_complexity.clone(),
                java_code: non_blank(&s.java_code),
                cpp_code: non_blank(&s.cpp_code),
                python_code: non_blank(&s.python_code),
                order_index,
            })
            .collect();

        Ok(Self {
            problem,
            tags: form.tags().to_vec(),
            pattern_ids: form.selected_patterns().to_vec(),
            company_ids: form.selected_companies().to_vec(),
            examples,
            hints,
            solutions,
        })
    }

    pub fn slug(&self) -> &str {
        &self.problem.slug
    }

    /// Dependent row batches for `problem_id`, in insert order.
    ///
    /// Order: tags, patterns, companies, examples, hints, solutions. Empty
    /// batches are skipped.
    pub fn child_batches(&self, problem_id: Uuid) -> Vec<ChildRows> {
        let batches = [
            ChildRows::Tags(
                self.tags
                    .iter()
                    .map(|tag| NewTag {
                        problem_id,
                        tag: tag.clone(),
                    })
                    .collect(),
            ),
            ChildRows::Patterns(
                self.pattern_ids
                    .iter()
                    .map(|&pattern_id| ProblemPattern {
                        problem_id,
                        pattern_id,
                    })
                    .collect(),
            ),
            ChildRows::Companies(
                self.company_ids
                    .iter()
                    .map(|&company_id| ProblemCompany {
                        problem_id,
                        company_id,
                    })
                    .collect(),
            ),
            ChildRows::Examples(
                self.examples
                    .iter()
                    .map(|e| NewExample {
                        problem_id,
                        input: e.input.clone(),
                        output: e.output.clone(),
                        explanation: e.explanation.clone(),
                        order_index: e.order_index,
                    })
                    .collect(),
            ),
            ChildRows::Hints(
                self.hints
                    .iter()
                    .map(|h| NewHint {
                        problem_id,
                        hint_text: h.hint_text.clone(),
                        order_index: h.order_index,
                    })
                    .collect(),
            ),
            ChildRows::Solutions(
                self.solutions
                    .iter()
                    .map(|s| NewSolution {
                        problem_id,
                        approach_level: s.approach_level,
                        title: s.title.clone(),
                        description: s.description.clone(),
                        time_complexity: s.time_complexity.clone(),
                        space_complexity: s.space_complexity.clone(),
                        java_code: s.java_code.clone(),
                        cpp_code: s.cpp_code.clone(),
                        python_code: s.python_code.clone(),
                        order_index: s.order_index,
                    })
                    .collect(),
            ),
        ];

        batches.into_iter().filter(|b| !b.is_empty()).collect()
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
