//! Authentication handler implementations

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    access::{AccessGate, AuthProvider, OAuthRedirect, SessionHolder},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::Session,
    services::AuthService,
    state::AppState,
    store::RoleStore,
};

use super::{
    request::{LoginRequest, RegisterRequest},
    response::{CurrentUserResponse, GateResponse, LogoutResponse, RegisterResponse, SessionResponse},
};

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    payload.validate()?;

    let user = state
        .auth_client(None)
        .sign_up(&payload.email, &payload.password, &payload.username)
        .await?;

    let response = RegisterResponse {
        message: "User registered successfully".to_string(),
        user: user.into(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Sign in with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<SessionResponse>> {
    payload.validate()?;

    let session = state
        .auth_client(None)
        .sign_in_with_password(&payload.email, &payload.password)
        .await?;

    Ok(Json(session.into()))
}

/// Start an OAuth sign-in
pub async fn oauth_redirect(
    State(state): State<AppState>,
    Path(provider): Path<String>,
) -> AppResult<Json<OAuthRedirect>> {
    let redirect = state.auth_client(None).sign_in_with_oauth(&provider).await?;
    Ok(Json(redirect))
}

/// Issue a fresh access token
pub async fn refresh_token(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Json<SessionResponse>> {
    let refreshed = state
        .auth_client(Some(session))
        .refresh_session()
        .await?
        .ok_or(AppError::Unauthorized)?;

    Ok(Json(refreshed.into()))
}

/// Sign out the caller's session
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<Json<LogoutResponse>> {
    let client = state.auth_client(Some(session));
    let holder = SessionHolder::new();
    holder.initialize(&client).await?;
    holder.sign_out(&client).await?;

    Ok(Json(LogoutResponse {
        message: "Logged out successfully".to_string(),
    }))
}

/// Get current authenticated user
pub async fn get_current_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<CurrentUserResponse>> {
    let user = AuthService::get_user_by_id(state.db(), &auth_user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(CurrentUserResponse {
        last_login_at: user.last_login_at,
        user: user.into(),
    }))
}

/// Admin gate decision for the caller's token
pub async fn gate(
    State(state): State<AppState>,
    session: Option<Session>,
) -> AppResult<Json<GateResponse>> {
    let client = state.auth_client(session);
    let holder = SessionHolder::new();
    holder.initialize(&client).await?;

    let roles: Arc<dyn RoleStore> = state.store().clone();
    let gate = AccessGate::new(holder, roles);
    let view = gate.resolve().await;

    Ok(Json(GateResponse {
        view,
        redirect_to: view.redirect_target(),
        is_admin: gate.is_admin(),
    }))
}
