//! users-api - User Resource Service
//!
//! This library provides a RESTful controller over a collection of users:
//! create, retrieve, replace-or-insert, JSON-patch partial update, delete and
//! paged listing with hypermedia links.
//!
//! # Features
//!
//! - PUT upsert that reports whether the user was created or replaced
//! - PATCH documents applied to the stored representation and re-validated
//!   before anything is written
//! - Pagination metadata in an `X-Pagination` header
//! - PostgreSQL or in-memory user store
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Storage access
//! - **Models**: Domain models

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

use axum::{middleware::from_fn, Router};

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Build the application router with every API route under `/api`
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest(constants::API_PREFIX, handlers::routes())
        .layer(from_fn(middleware::logging_middleware))
        .with_state(state)
}
