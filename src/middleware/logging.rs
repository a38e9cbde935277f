//! Logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::{debug, info, warn};

/// How a finished request should be reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Ok,
    /// Client errors a well-behaved client can still hit (404, 422)
    Expected,
    Rejected,
    Failed,
}

fn classify(status: StatusCode) -> Outcome {
    if status.is_server_error() {
        Outcome::Failed
    } else if status == StatusCode::NOT_FOUND || status == StatusCode::UNPROCESSABLE_ENTITY {
        Outcome::Expected
    } else if status.is_client_error() {
        Outcome::Rejected
    } else {
        Outcome::Ok
    }
}

/// Request logging middleware
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    match classify(response.status()) {
        Outcome::Failed => warn!(%method, %path, status, %duration_ms, "Request failed"),
        Outcome::Rejected => warn!(%method, %path, status, %duration_ms, "Request rejected"),
        Outcome::Expected => debug!(%method, %path, status, %duration_ms, "Request completed"),
        Outcome::Ok => info!(%method, %path, status, %duration_ms, "Request completed"),
    }

    response
}
