//! User model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User database model
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct UserEntity {
    /// Nil until the store assigns an id on insert
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub login: String,
}

impl UserEntity {
    /// Build an entity that has not been stored yet
    pub fn new(
        first_name: Option<String>,
        last_name: Option<String>,
        login: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::nil(),
            first_name,
            last_name,
            login: login.into(),
        }
    }

    /// Whether the store still has to assign an id
    pub fn is_transient(&self) -> bool {
        self.id.is_nil()
    }

    /// First and last name joined by a space, skipping missing parts
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
