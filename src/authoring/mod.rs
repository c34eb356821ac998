//! Problem authoring
//!
//! The editable form, its conversion into rows, and the multi-table
//! submission.

pub mod form;
pub mod plan;
pub mod submit;

pub use form::{AuthoringForm, ExampleDraft, SolutionDraft};
pub use plan::SubmissionPlan;
pub use submit::{AuthoringService, Notice, NoticeKind, SubmissionOutcome};
