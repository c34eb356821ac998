//! Admin handler implementations

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    authoring::AuthoringService,
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::Taxonomy,
    state::AppState,
    store::ContentStore,
};

use super::{
    request::CreateProblemRequest,
    response::{CreateProblemResponse, TaxonomyResponse},
};

/// Patterns and companies ordered by name
pub async fn get_taxonomy(State(state): State<AppState>) -> AppResult<Json<TaxonomyResponse>> {
    let store = state.store();
    let (patterns, companies) = futures::try_join!(
        store.select_ordered(Taxonomy::Patterns),
        store.select_ordered(Taxonomy::Companies),
    )?;

    Ok(Json(TaxonomyResponse { patterns, companies }))
}

/// Submit the authoring form
pub async fn create_problem(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateProblemRequest>,
) -> AppResult<(StatusCode, Json<CreateProblemResponse>)> {
    payload.validate()?;

    let mut form = payload.into_form();
    let outcome = AuthoringService::submit_form(state.store().as_ref(), &mut form, Some(auth_user.id)).await;
    let problem = outcome.result?;

    Ok((
        StatusCode::CREATED,
        Json(CreateProblemResponse {
            problem,
            notice: outcome.notice,
        }),
    ))
}
