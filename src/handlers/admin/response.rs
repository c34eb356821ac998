//! Admin response DTOs

use serde::Serialize;

use crate::{
    authoring::Notice,
    models::{Problem, TaxonomyEntry},
};

/// Checklist options for the authoring form
#[derive(Debug, Serialize)]
pub struct TaxonomyResponse {
    pub patterns: Vec<TaxonomyEntry>,
    pub companies: Vec<TaxonomyEntry>,
}

/// Created problem plus the notification to show
#[derive(Debug, Serialize)]
pub struct CreateProblemResponse {
    pub problem: Problem,
    pub notice: Notice,
}
