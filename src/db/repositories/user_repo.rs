//! User repository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{PageRequest, UserEntity},
};

/// Persistence operations on users, keyed by id.
///
/// Implementations own their concurrency safety; in particular
/// `update_or_insert` must be atomic per id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<UserEntity>>;

    /// Store a new user, assigning a fresh id when the entity has none
    async fn insert(&self, user: UserEntity) -> AppResult<UserEntity>;

    /// Overwrite an existing user in place
    async fn update(&self, user: &UserEntity) -> AppResult<()>;

    /// Overwrite the user with `user.id`, or insert it under that id.
    /// Returns `true` when a new user was inserted.
    async fn update_or_insert(&self, user: &UserEntity) -> AppResult<bool>;

    /// Delete user by ID
    async fn delete(&self, id: &Uuid) -> AppResult<()>;

    /// One page of users ordered by login, then id
    async fn get_page(&self, page: PageRequest) -> AppResult<Vec<UserEntity>>;

    /// Fails when the backing store cannot be reached
    async fn ping(&self) -> AppResult<()>;
}

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<UserEntity>> {
        let user = sqlx::query_as::<_, UserEntity>(
            r#"SELECT id, first_name, last_name, login FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert(&self, user: UserEntity) -> AppResult<UserEntity> {
        let id = if user.is_transient() { Uuid::new_v4() } else { user.id };

        let user = sqlx::query_as::<_, UserEntity>(
            r#"
            INSERT INTO users (id, first_name, last_name, login)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, login
            "#,
        )
        .bind(id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.login)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn update(&self, user: &UserEntity) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET first_name = $2, last_name = $3, login = $4
            WHERE id = $1
            "#,
        )
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.login)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_or_insert(&self, user: &UserEntity) -> AppResult<bool> {
        // xmax is zero only for a row version created by this INSERT
        let inserted: bool = sqlx::query_scalar(
            r#"
            INSERT INTO users (id, first_name, last_name, login)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                login = EXCLUDED.login
            RETURNING (xmax = 0) AS inserted
            "#,
        )
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.login)
        .fetch_one(&self.pool)
        .await?;

        Ok(inserted)
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn get_page(&self, page: PageRequest) -> AppResult<Vec<UserEntity>> {
        let users = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, first_name, last_name, login FROM users
            ORDER BY login, id
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(page.offset() as i64)
        .bind(i64::from(page.page_size))
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
