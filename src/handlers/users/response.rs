//! User response DTOs

use serde::Serialize;
use uuid::Uuid;

use crate::models::UserEntity;

/// User representation returned by the read endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub login: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: String,
}

impl From<UserEntity> for UserResponse {
    fn from(user: UserEntity) -> Self {
        let full_name = user.full_name();
        UserResponse {
            id: user.id,
            login: user.login,
            first_name: user.first_name,
            last_name: user.last_name,
            full_name,
        }
    }
}

/// Metadata serialized into the `X-Pagination` header of a list response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    pub previous_page_link: Option<String>,
    pub next_page_link: String,
    pub total_count: u64,
    pub page_size: u32,
    pub current_page: u32,
    pub total_pages: u64,
}
