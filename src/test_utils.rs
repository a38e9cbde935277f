//! Test utilities
//!
//! Router-level helpers backed by the in-memory user store.

#[cfg(test)]
pub mod test_app {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, HeaderMap, Method, Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::{
        config::{Config, LinkConfig, ServerConfig},
        db::repositories::{InMemoryUserRepository, UserRepository},
        state::AppState,
    };

    /// Host header sent with every test request
    pub const TEST_HOST: &str = "users.test";

    /// Decoded response of a test request
    pub struct TestResponse {
        pub status: StatusCode,
        pub headers: HeaderMap,
        /// `Value::Null` when the body was empty
        pub body: Value,
    }

    impl TestResponse {
        pub fn header(&self, name: &str) -> Option<String> {
            self.headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        }
    }

    /// Create a test application on an empty in-memory store
    pub fn create_test_app() -> (Router, InMemoryUserRepository) {
        let repo = InMemoryUserRepository::new();
        (create_test_app_with(Arc::new(repo.clone())), repo)
    }

    /// Create a test application over an arbitrary user store
    pub fn create_test_app_with(users: Arc<dyn UserRepository>) -> Router {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                rust_log: "debug".to_string(),
            },
            links: LinkConfig::default(),
            database: None,
        };

        crate::create_router(AppState::new(users, config))
    }

    /// Send one request through the router
    pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let mut request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::HOST, TEST_HOST);

        let body = match body {
            Some(value) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&value).unwrap())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, headers, body }
    }
}
