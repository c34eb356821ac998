//! Admin request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    authoring::{AuthoringForm, ExampleDraft, SolutionDraft},
    constants::{MAX_PROBLEM_STATEMENT_LENGTH, MAX_PROBLEM_TITLE_LENGTH},
    models::Difficulty,
};

/// Full authoring form payload.
///
/// Required fields are checked by the authoring service, not here, so the
/// client gets the same message it would see locally.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateProblemRequest {
    #[validate(length(max = MAX_PROBLEM_TITLE_LENGTH))]
    pub title: String,

    pub difficulty: Difficulty,

    #[validate(length(max = MAX_PROBLEM_STATEMENT_LENGTH))]
    pub problem_statement: String,

    pub constraints: String,
    pub tags: Vec<String>,
    pub pattern_ids: Vec<Uuid>,
    pub company_ids: Vec<Uuid>,
    pub examples: Vec<ExampleDraft>,
    pub hints: Vec<String>,
    pub solutions: Vec<SolutionDraft>,
}

impl CreateProblemRequest {
    /// Replay the payload onto a fresh form
    pub fn into_form(self) -> AuthoringForm {
        let mut form = AuthoringForm::new();
        form.title = self.title;
        form.difficulty = self.difficulty;
        form.problem_statement = self.problem_statement;
        form.constraints = self.constraints;

        for tag in &self.tags {
            form.add_tag(tag);
        }
        for id in self.pattern_ids {
            if !form.selected_patterns().contains(&id) {
                form.toggle_pattern(id);
            }
        }
        for id in self.company_ids {
            if !form.selected_companies().contains(&id) {
                form.toggle_company(id);
            }
        }

        for (index, example) in self.examples.into_iter().enumerate() {
            if index > 0 {
                form.add_example();
            }
            form.update_example(index, example);
        }
        for (index, hint) in self.hints.into_iter().enumerate() {
            if index > 0 {
                form.add_hint();
            }
            form.update_hint(index, hint);
        }
        for draft in self.solutions {
            form.update_solution(draft.approach_level, draft);
        }

        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApproachLevel;

    #[test]
    fn test_into_form() {
        let pattern = Uuid::new_v4();
        let request: CreateProblemRequest = serde_json::from_value(serde_json::json!({
            "title": "Two Sum",
            "difficulty": "easy",
            "problem_statement": "Find two numbers.",
            "tags": ["Arrays", " Arrays ", "Hashing"],
            "pattern_ids": [pattern, pattern],
            "examples": [
                {"input": "[2,7]", "output": "[0,1]"},
                {"input": "[3,3]", "output": "[0,1]", "explanation": "same value"}
            ],
            "hints": ["Use a map"],
            "solutions": [
                {"approach_level": "Best", "title": "Hash Map", "description": "One pass"}
            ]
        }))
        .unwrap();

        let form = request.into_form();

        assert_eq!(form.title, "Two Sum");
        assert_eq!(form.difficulty, Difficulty::Easy);
        assert_eq!(form.tags(), ["Arrays", "Hashing"]);
        assert_eq!(form.selected_patterns(), [pattern]);
        assert_eq!(form.examples().len(), 2);
        assert_eq!(form.examples()[1].explanation, "same value");
        assert_eq!(form.hints(), ["Use a map"]);
        assert_eq!(form.solution(ApproachLevel::Best).title, "Hash Map");
        assert_eq!(form.solution(ApproachLevel::Good).title, "Brute Force");
    }

    #[test]
    fn test_long_tags_are_kept() {
        let long_tag = "x".repeat(65);
        let request: CreateProblemRequest = serde_json::from_value(serde_json::json!({
            "tags": [&long_tag, "arrays", "   "]
        }))
        .unwrap();

        let form = request.into_form();
        assert_eq!(form.tags(), [long_tag.as_str(), "arrays"]);
    }

    #[test]
    fn test_text_fields_are_stored_as_sent() {
        let request: CreateProblemRequest = serde_json::from_value(serde_json::json!({
            "title": "  Two Sum ",
            "problem_statement": "  Find two numbers.\n",
            "hints": ["  Use a map "]
        }))
        .unwrap();

        let form = request.into_form();
        assert_eq!(form.title, "  Two Sum ");
        assert_eq!(form.problem_statement, "  Find two numbers.\n");
        assert_eq!(form.hints(), ["  Use a map "]);
    }

    #[test]
    fn test_empty_payload_keeps_default_slots() {
        let form = CreateProblemRequest::default().into_form();
        assert_eq!(form, AuthoringForm::new());
    }
}
