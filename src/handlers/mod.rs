//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod health;
pub mod problems;
pub mod progress;

use axum::{middleware, Router};

use crate::{
    middleware::auth::{admin_middleware, auth_middleware, optional_auth_middleware},
    state::AppState,
};

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(catalog::routes())
        .nest("/auth", auth::routes())
        .nest("/problems", problems::routes())
        .nest("/progress", progress::routes())
        .nest(
            "/admin",
            admin::routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), admin_middleware))
                .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
        )
        .layer(middleware::from_fn_with_state(state, optional_auth_middleware))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header::AUTHORIZATION, Request, StatusCode},
    };
    use serde_json::Value;
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use super::*;
    use crate::{constants::API_BASE_PATH, test_utils::test_config};

    /// Router over the sample catalogue; the pool never connects
    fn app() -> Router {
        let config = test_config();
        let pool = PgPoolOptions::new()
            .connect_lazy(&config.database.url)
            .expect("lazy pool");
        let state = AppState::new(pool, config);

        Router::new()
            .nest(API_BASE_PATH, routes(state.clone()))
            .with_state(state)
    }

    async fn get(uri: &str) -> (StatusCode, Value) {
        send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get("/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_list_patterns() {
        let (status, body) = get("/api/v1/patterns").await;
        assert_eq!(status, StatusCode::OK);

        let categories = body["categories"].as_array().unwrap();
        assert_eq!(categories.len(), 12);
        assert_eq!(categories[0]["slug"], "arrays-hashing");
    }

    #[tokio::test]
    async fn test_pattern_page_uses_known_title() {
        let (status, body) = get("/api/v1/patterns/arrays-hashing").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Arrays & Hashing");
        assert_eq!(body["problems"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_difficulties() {
        let (status, body) = get("/api/v1/difficulties").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["difficulties"][0]["difficulty"], "easy");
        assert_eq!(body["difficulties"][0]["problem_count"], 127);
    }

    #[tokio::test]
    async fn test_filter_problems() {
        let (status, body) = get("/api/v1/problems?difficulty=easy").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 1);
        assert_eq!(body["problems"][0]["slug"], "two-sum");

        let (_, body) = get("/api/v1/problems?company=microsoft").await;
        assert_eq!(body["problems"][0]["slug"], "three-sum");
    }

    #[tokio::test]
    async fn test_problem_detail() {
        let (status, body) = get("/api/v1/problems/two-sum").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hints"].as_array().unwrap().len(), 4);
        assert_eq!(body["solutions"][2]["approach_level"], "Best");

        let (status, body) = get("/api/v1/problems/no-such-problem").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_progress_requires_auth() {
        let (status, body) = get("/api/v1/progress/summary").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_admin_rejects_bad_token_before_role_lookup() {
        let request = Request::post("/api/v1/admin/problems")
            .header(AUTHORIZATION, "Bearer not-a-token")
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "INVALID_TOKEN");
    }

    #[tokio::test]
    async fn test_gate_without_session_redirects_to_auth() {
        let (status, body) = get("/api/v1/auth/gate").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["view"], "redirect_to_auth");
        assert_eq!(body["redirect_to"], "/auth");
        assert_eq!(body["is_admin"], false);
    }

    #[tokio::test]
    async fn test_oauth_redirect() {
        let (status, body) = get("/api/v1/auth/oauth/google").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["provider"], "google");
        assert!(body["url"].as_str().unwrap().contains("state="));

        let (status, _) = get("/api/v1/auth/oauth/myspace").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
