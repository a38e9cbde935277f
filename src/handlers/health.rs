//! Liveness and store reachability

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub store: &'static str,
    pub version: &'static str,
}

/// 200 while the user store answers, 503 once it does not
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, store) = match state.users().ping().await {
        Ok(()) => (StatusCode::OK, "healthy", "up"),
        Err(e) => {
            tracing::warn!(error = %e, "User store unreachable");
            (StatusCode::SERVICE_UNAVAILABLE, "unhealthy", "down")
        }
    };

    let body = HealthResponse {
        status,
        store,
        version: env!("CARGO_PKG_VERSION"),
    };
    (code, Json(body))
}

/// Health routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::{Method, StatusCode};

    use crate::{
        db::repositories::MockUserRepository,
        error::AppError,
        test_utils::test_app::{create_test_app, create_test_app_with, send},
    };

    #[tokio::test]
    async fn test_health_check() {
        let (app, _) = create_test_app();
        let response = send(&app, Method::GET, "/api/health", None).await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["status"], "healthy");
        assert_eq!(response.body["store"], "up");
    }

    #[tokio::test]
    async fn test_health_check_reports_unreachable_store() {
        let mut repo = MockUserRepository::new();
        repo.expect_ping()
            .returning(|| Err(AppError::Database("connection refused".into())));

        let app = create_test_app_with(Arc::new(repo));
        let response = send(&app, Method::GET, "/api/health", None).await;

        assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.body["status"], "unhealthy");
        assert_eq!(response.body["store"], "down");
    }
}
