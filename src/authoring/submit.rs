//! Authoring submission

use serde::Serialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::{form::AuthoringForm, plan::SubmissionPlan};
use crate::{
    constants::PROBLEM_CREATED_MESSAGE,
    error::{AppError, AppResult},
    models::Problem,
    store::ContentStore,
};

/// Kind of user-visible notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Failure,
}

/// The single notification shown after a submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success() -> Self {
        Self {
            kind: NoticeKind::Success,
            message: PROBLEM_CREATED_MESSAGE.to_string(),
        }
    }

    pub fn failure(err: &AppError) -> Self {
        Self {
            kind: NoticeKind::Failure,
            message: err.user_message(),
        }
    }
}

/// Result of submitting the form
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub notice: Notice,
    pub result: AppResult<Problem>,
}

/// Problem authoring service
pub struct AuthoringService;

impl AuthoringService {
    /// Validate and persist a form.
    ///
    /// Validation failures return before the store is touched. A slug that
    /// is already taken is reported as `Conflict`.
    pub async fn submit<S>(store: &S, form: &AuthoringForm, created_by: Option<Uuid>) -> AppResult<Problem>
    where
        S: ContentStore + ?Sized,
    {
        let plan = SubmissionPlan::from_form(form, created_by)?;
        let slug = plan.slug().to_string();

        if store.find_problem_by_slug(&slug).await?.is_some() {
            warn!(slug = %slug, "Rejected submission with duplicate slug");
            return Err(duplicate_slug(&slug));
        }

        let problem = store.insert_submission(&plan).await.map_err(|e| match e {
            AppError::AlreadyExists(_) => duplicate_slug(&slug),
            other => other,
        })?;

        info!(problem_id = %problem.id, slug = %problem.slug, "Problem created");
        Ok(problem)
    }

    /// Submit the form and produce its notification; the form resets on success
    pub async fn submit_form<S>(
        store: &S,
        form: &mut AuthoringForm,
        created_by: Option<Uuid>,
    ) -> SubmissionOutcome
    where
        S: ContentStore + ?Sized,
    {
        let result = Self::submit(store, form, created_by).await;

        let notice = match &result {
            Ok(_) => {
                form.reset();
                Notice::success()
            }
            Err(e) => Notice::failure(e),
        };

        SubmissionOutcome { notice, result }
    }
}

fn duplicate_slug(slug: &str) -> AppError {
    AppError::Conflict(format!("A problem with slug '{}' already exists", slug))
}

/// Insert a plan one table at a time.
///
/// If a dependent insert fails the parent problem row is deleted again.
/// When that delete fails too, the orphan is logged and reported with
/// `compensated: false`.
pub async fn insert_sequentially<S>(store: &S, plan: &SubmissionPlan) -> AppResult<Problem>
where
    S: ContentStore + ?Sized,
{
    let problem = store.insert_problem(&plan.problem).await?;

    for batch in plan.child_batches(problem.id) {
        let table = batch.table();

        if let Err(err) = store.insert_rows(&batch).await {
            warn!(problem_id = %problem.id, table = %table, error = %err, "Dependent insert failed");

            let compensated = match store.delete_problem(problem.id).await {
                Ok(()) => true,
                Err(delete_err) => {
                    error!(
                        problem_id = %problem.id,
                        table = %table,
                        error = %delete_err,
                        "Could not remove partially written problem; orphaned row left behind"
                    );
                    false
                }
            };

            return Err(AppError::PartialSubmission {
                problem_id: problem.id,
                table,
                message: err.user_message(),
                compensated,
            });
        }
    }

    Ok(problem)
}
