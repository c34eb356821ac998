//! Editable state of the problem authoring form

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    constants::{DEFAULT_BEST_SOLUTION_TITLE, DEFAULT_BETTER_SOLUTION_TITLE, DEFAULT_GOOD_SOLUTION_TITLE},
    models::{ApproachLevel, Difficulty},
    utils::validate_tag,
};

/// One example slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleDraft {
    pub input: String,
    pub output: String,
    #[serde(default)]
    pub explanation: String,
}

impl ExampleDraft {
    /// Slots with both input and output blank are not submitted
    pub fn is_blank(&self) -> bool {
        self.input.trim().is_empty() && self.output.trim().is_empty()
    }
}

/// One of the three fixed solution slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionDraft {
    pub approach_level: ApproachLevel,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub time_complexity: String,
    #[serde(default)]
    pub space_complexity: String,
    #[serde(default)]
    pub java_code: String,
    #[serde(default)]
    pub cpp_code: String,
    #[serde(default)]
    pub python_code: String,
}

impl SolutionDraft {
    /// Empty slot for a level, seeded with that level's default title
    pub fn seeded(approach_level: ApproachLevel) -> Self {
        let title = match approach_level {
            ApproachLevel::Good => DEFAULT_GOOD_SOLUTION_TITLE,
            ApproachLevel::Better => DEFAULT_BETTER_SOLUTION_TITLE,
            ApproachLevel::Best => DEFAULT_BEST_SOLUTION_TITLE,
        };

        Self {
            approach_level,
            title: title.to_string(),
            description: String::new(),
            time_complexity: String::new(),
            space_complexity: String::new(),
            java_code: String::new(),
            cpp_code: String::new(),
            python_code: String::new(),
        }
    }

    /// A slot is submitted only when title and description are both filled
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }
}

/// Problem authoring form.
///
/// Examples and hints always keep at least one slot. Solutions are fixed to
/// one slot per approach level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthoringForm {
    pub title: String,
    pub difficulty: Difficulty,
    pub problem_statement: String,
    pub constraints: String,
    tags: Vec<String>,
    selected_patterns: Vec<Uuid>,
    selected_companies: Vec<Uuid>,
    examples: Vec<ExampleDraft>,
    hints: Vec<String>,
    solutions: [SolutionDraft; 3],
}

impl Default for AuthoringForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            difficulty: Difficulty::default(),
            problem_statement: String::new(),
            constraints: String::new(),
            tags: Vec::new(),
            selected_patterns: Vec::new(),
            selected_companies: Vec::new(),
            examples: vec![ExampleDraft::default()],
            hints: vec![String::new()],
            solutions: ApproachLevel::ALL.map(SolutionDraft::seeded),
        }
    }
}

impl AuthoringForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every field back to its initial value
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Add a trimmed tag. Blank and already present tags are ignored.
    pub fn add_tag(&mut self, input: &str) -> bool {
        let tag = input.trim();
        if validate_tag(tag).is_err() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn selected_patterns(&self) -> &[Uuid] {
        &self.selected_patterns
    }

    pub fn selected_companies(&self) -> &[Uuid] {
        &self.selected_companies
    }

    /// Select the pattern if absent, deselect it if present
    pub fn toggle_pattern(&mut self, id: Uuid) {
        toggle(&mut self.selected_patterns, id);
    }

    /// Select the company if absent, deselect it if present
    pub fn toggle_company(&mut self, id: Uuid) {
        toggle(&mut self.selected_companies, id);
    }

    pub fn examples(&self) -> &[ExampleDraft] {
        &self.examples
    }

    pub fn add_example(&mut self) {
        self.examples.push(ExampleDraft::default());
    }

    /// Remove an example slot; the last remaining slot stays
    pub fn remove_example(&mut self, index: usize) -> bool {
        if self.examples.len() <= 1 || index >= self.examples.len() {
            return false;
        }
        self.examples.remove(index);
        true
    }

    pub fn update_example(&mut self, index: usize, example: ExampleDraft) -> bool {
        match self.examples.get_mut(index) {
            Some(slot) => {
                *slot = example;
                true
            }
            None => false,
        }
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    pub fn add_hint(&mut self) {
        self.hints.push(String::new());
    }

    /// Remove a hint slot; the last remaining slot stays
    pub fn remove_hint(&mut self, index: usize) -> bool {
        if self.hints.len() <= 1 || index >= self.hints.len() {
            return false;
        }
        self.hints.remove(index);
        true
    }

    pub fn update_hint(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.hints.get_mut(index) {
            Some(slot) => {
                *slot = text.into();
                true
            }
            None => false,
        }
    }

    /// Solution slots in Good, Better, Best order
    pub fn solutions(&self) -> &[SolutionDraft; 3] {
        &self.solutions
    }

    pub fn solution(&self, level: ApproachLevel) -> &SolutionDraft {
        &self.solutions[slot_index(level)]
    }

    /// Replace a solution slot. The slot keeps its approach level.
    pub fn update_solution(&mut self, level: ApproachLevel, mut draft: SolutionDraft) {
        draft.approach_level = level;
        self.solutions[slot_index(level)] = draft;
    }
}

fn slot_index(level: ApproachLevel) -> usize {
    match level {
        ApproachLevel::Good => 0,
        ApproachLevel::Better => 1,
        ApproachLevel::Best => 2,
    }
}

fn toggle(selection: &mut Vec<Uuid>, id: Uuid) {
    if let Some(pos) = selection.iter().position(|s| *s == id) {
        selection.remove(pos);
    } else {
        selection.push(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = AuthoringForm::new();
        assert_eq!(form.difficulty, Difficulty::Medium);
        assert_eq!(form.examples().len(), 1);
        assert_eq!(form.hints().len(), 1);
        assert_eq!(form.solution(ApproachLevel::Good).title, "Brute Force");
        assert_eq!(form.solution(ApproachLevel::Better).title, "");
        assert_eq!(form.solution(ApproachLevel::Best).title, "Optimal");
    }

    #[test]
    fn test_add_tag_is_set_like() {
        let mut form = AuthoringForm::new();
        assert!(form.add_tag("  arrays "));
        assert!(!form.add_tag("arrays"));
        assert!(!form.add_tag("   "));
        assert_eq!(form.tags(), ["arrays".to_string()]);

        form.remove_tag("arrays");
        assert!(form.tags().is_empty());
    }

    #[test]
    fn test_toggle_selection() {
        let mut form = AuthoringForm::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        form.toggle_pattern(a);
        form.toggle_pattern(b);
        form.toggle_pattern(a);
        assert_eq!(form.selected_patterns(), [b]);

        form.toggle_company(a);
        assert_eq!(form.selected_companies(), [a]);
        form.toggle_company(a);
        assert!(form.selected_companies().is_empty());
    }

    #[test]
    fn test_last_example_and_hint_slot_is_kept() {
        let mut form = AuthoringForm::new();
        assert!(!form.remove_example(0));
        assert!(!form.remove_hint(0));

        form.add_example();
        form.add_hint();
        assert!(form.remove_example(1));
        assert!(form.remove_hint(0));
        assert_eq!(form.examples().len(), 1);
        assert_eq!(form.hints().len(), 1);
        assert!(!form.remove_example(5));
    }

    #[test]
    fn test_update_solution_keeps_level() {
        let mut form = AuthoringForm::new();
        let mut draft = SolutionDraft::seeded(ApproachLevel::Good);
        draft.title = "HashMap".to_string();

        form.update_solution(ApproachLevel::Best, draft);
        let best = form.solution(ApproachLevel::Best);
        assert_eq!(best.approach_level, ApproachLevel::Best);
        assert_eq!(best.title, "HashMap");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = AuthoringForm::new();
        form.title = "Two Sum".to_string();
        form.difficulty = Difficulty::Easy;
        form.add_tag("arrays");
        form.add_example();
        form.update_hint(0, "use a map");

        form.reset();
        assert_eq!(form, AuthoringForm::default());
    }
}
