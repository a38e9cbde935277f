//! In-memory user repository
//!
//! Used when no database is configured and as the backing store in tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::UserRepository;
use crate::{
    error::AppResult,
    models::{PageRequest, UserEntity},
};

/// Thread-safe user store backed by a `HashMap` behind tokio's `RwLock`
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, UserEntity>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<UserEntity>> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn insert(&self, mut user: UserEntity) -> AppResult<UserEntity> {
        let mut users = self.users.write().await;

        if user.is_transient() {
            user.id = loop {
                let id = Uuid::new_v4();
                if !users.contains_key(&id) {
                    break id;
                }
            };
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: &UserEntity) -> AppResult<()> {
        let mut users = self.users.write().await;
        if let Some(stored) = users.get_mut(&user.id) {
            *stored = user.clone();
        }
        Ok(())
    }

    async fn update_or_insert(&self, user: &UserEntity) -> AppResult<bool> {
        let mut users = self.users.write().await;
        let inserted = users.insert(user.id, user.clone()).is_none();
        Ok(inserted)
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        self.users.write().await.remove(id);
        Ok(())
    }

    async fn get_page(&self, page: PageRequest) -> AppResult<Vec<UserEntity>> {
        let users = self.users.read().await;

        // Sort for consistent ordering across pages
        let mut all: Vec<&UserEntity> = users.values().collect();
        all.sort_by(|a, b| a.login.cmp(&b.login).then(a.id.cmp(&b.id)));

        Ok(all
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.page_size as usize)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
