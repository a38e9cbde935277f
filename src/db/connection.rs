//! Database connection management

use std::sync::Arc;

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    config::DatabaseConfig,
    db::repositories::{InMemoryUserRepository, PgUserRepository, UserRepository},
    error::AppResult,
};

/// Create a new database connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
}

/// Test database connection
pub async fn test_connection(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Build the user store selected by configuration.
///
/// With a database configured this connects, verifies the connection and runs
/// migrations; otherwise users live in process memory.
pub async fn connect_user_repository(
    config: Option<&DatabaseConfig>,
) -> AppResult<Arc<dyn UserRepository>> {
    let Some(config) = config else {
        tracing::warn!("DATABASE_URL not set, users are kept in memory");
        return Ok(Arc::new(InMemoryUserRepository::new()));
    };

    tracing::info!("Connecting to database...");
    let pool = create_pool(config).await?;
    test_connection(&pool).await?;

    tracing::info!("Running database migrations...");
    super::run_migrations(&pool).await?;

    Ok(Arc::new(PgUserRepository::new(pool)))
}
