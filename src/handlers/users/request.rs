//! User request DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use crate::constants::fields;
use crate::models::UserEntity;
use crate::utils::{validation::LOGIN_PATTERN, BodyFields};

/// Create user request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: Option<String>,

    pub last_name: Option<String>,

    #[validate(
        required(message = "The Login field is required."),
        length(min = 1, message = "The Login field is required.")
    )]
    pub login: Option<String>,
}

/// Only a malformed login is unprocessable on create; anything else is a bad request
impl BodyFields for CreateUserRequest {
    const FIELDS: &'static [&'static str] = &[fields::LOGIN];
}

impl From<CreateUserRequest> for UserEntity {
    fn from(request: CreateUserRequest) -> Self {
        UserEntity {
            id: Uuid::nil(),
            first_name: request.first_name,
            last_name: request.last_name,
            login: request.login.unwrap_or_default(),
        }
    }
}

/// Full replacement body for `PUT /users/{id}`.
///
/// Also the shape a stored user is materialized into before a patch document
/// is applied, so PUT and PATCH share one set of validation rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceUserRequest {
    /// Overwritten from the route; whatever the body carries is ignored
    #[serde(default)]
    pub id: Uuid,

    #[validate(
        required(message = "The FirstName field is required."),
        length(min = 1, message = "The FirstName field is required.")
    )]
    pub first_name: Option<String>,

    #[validate(
        required(message = "The LastName field is required."),
        length(min = 1, message = "The LastName field is required.")
    )]
    pub last_name: Option<String>,

    #[validate(
        required(message = "The Login field is required."),
        length(min = 1, message = "The Login field is required."),
        regex(path = *LOGIN_PATTERN, message = "Login should contain only letters or digits")
    )]
    pub login: Option<String>,
}

impl BodyFields for ReplaceUserRequest {
    const FIELDS: &'static [&'static str] =
        &[fields::ID, fields::FIRST_NAME, fields::LAST_NAME, fields::LOGIN];
}

impl ReplaceUserRequest {
    /// Copy the represented fields onto `entity`, leaving its id untouched
    pub fn apply_to(self, entity: &mut UserEntity) {
        entity.first_name = self.first_name;
        entity.last_name = self.last_name;
        entity.login = self.login.unwrap_or_default();
    }
}

impl From<&UserEntity> for ReplaceUserRequest {
    fn from(entity: &UserEntity) -> Self {
        ReplaceUserRequest {
            id: entity.id,
            first_name: entity.first_name.clone(),
            last_name: entity.last_name.clone(),
            login: Some(entity.login.clone()),
        }
    }
}

impl From<ReplaceUserRequest> for UserEntity {
    fn from(request: ReplaceUserRequest) -> Self {
        UserEntity {
            id: request.id,
            first_name: request.first_name,
            last_name: request.last_name,
            login: request.login.unwrap_or_default(),
        }
    }
}

/// Patch verbs understood by the partial update endpoint, matched
/// case-insensitively
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum PatchOp {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

impl TryFrom<String> for PatchOp {
    type Error = String;

    fn try_from(op: String) -> Result<Self, Self::Error> {
        match op.to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "remove" => Ok(Self::Remove),
            "replace" => Ok(Self::Replace),
            "move" => Ok(Self::Move),
            "copy" => Ok(Self::Copy),
            "test" => Ok(Self::Test),
            _ => Err(format!("unknown patch operation '{}'", op)),
        }
    }
}

/// One entry of a patch document
#[derive(Debug, Clone, Deserialize)]
pub struct PatchOperation {
    pub op: PatchOp,
    pub path: String,
    #[serde(default)]
    pub from: Option<String>,
    /// Absent deserializes as `null`
    #[serde(default)]
    pub value: Value,
}

/// A patch document is decoded as a whole
impl BodyFields for Vec<PatchOperation> {
    const FIELDS: &'static [&'static str] = &[];
}

/// List users query parameters
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersQuery {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}
