//! Problem request DTOs

use serde::Deserialize;
use validator::Validate;

/// Practice submission; the code is stored nowhere and never executed
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitSolutionRequest {
    #[validate(length(min = 1, max = 32))]
    pub language: String,

    #[validate(length(min = 1, max = 65535))]
    pub code: String,
}
