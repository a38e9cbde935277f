//! User service

use uuid::Uuid;

use crate::{
    constants::fields,
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    handlers::users::request::{CreateUserRequest, PatchOperation, ReplaceUserRequest},
    models::{PageRequest, UserEntity},
    services::patch::apply_patch,
    utils::validation::{validate_creation, validate_login_characters, validate_replacement},
};

/// What a replace-or-insert did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Updated,
    Inserted(Uuid),
}

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Get user by ID
    pub async fn get_user_by_id(repo: &dyn UserRepository, id: &Uuid) -> AppResult<UserEntity> {
        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::user_not_found(id))
    }

    /// Create a user from a create body.
    ///
    /// A missing or malformed login is unprocessable, any other structural
    /// failure is a bad request.
    pub async fn create_user(
        repo: &dyn UserRepository,
        input: Option<CreateUserRequest>,
    ) -> AppResult<UserEntity> {
        let input = input.ok_or_else(|| AppError::BadRequest("Request body is required".into()))?;

        let errors = validate_creation(&input);
        if !errors.is_empty() {
            if errors.contains(fields::LOGIN) {
                return Err(AppError::UnprocessableEntity(errors));
            }
            return Err(AppError::BadRequest(errors.to_string()));
        }

        validate_login_characters(input.login.as_deref().unwrap_or_default()).into_result()?;

        let user = repo.insert(UserEntity::from(input)).await?;
        tracing::info!(user_id = %user.id, login = %user.login, "User created");

        Ok(user)
    }

    /// Replace the user at `id`, creating it under that id when absent
    pub async fn replace_user(
        repo: &dyn UserRepository,
        id: Uuid,
        input: Option<ReplaceUserRequest>,
    ) -> AppResult<UpsertOutcome> {
        if id.is_nil() {
            return Err(AppError::BadRequest("User id is required".into()));
        }
        let mut input =
            input.ok_or_else(|| AppError::BadRequest("Request body is required".into()))?;

        validate_replacement(&input).into_result()?;

        // The route is authoritative for the id
        input.id = id;
        let user = UserEntity::from(input);

        if repo.update_or_insert(&user).await? {
            tracing::info!(user_id = %id, "User inserted by replace");
            Ok(UpsertOutcome::Inserted(id))
        } else {
            tracing::info!(user_id = %id, "User replaced");
            Ok(UpsertOutcome::Updated)
        }
    }

    /// Apply a patch document to the user at `id`.
    ///
    /// The store is only written when every operation applied cleanly and
    /// the patched representation passes the same rules as a PUT body.
    pub async fn patch_user(
        repo: &dyn UserRepository,
        id: &Uuid,
        operations: Option<Vec<PatchOperation>>,
    ) -> AppResult<()> {
        let operations = operations
            .ok_or_else(|| AppError::BadRequest("Patch document is required".into()))?;

        let mut user = Self::get_user_by_id(repo, id).await?;

        let mut patched = ReplaceUserRequest::from(&user);
        let mut errors = apply_patch(&mut patched, &operations);
        errors.merge(validate_replacement(&patched));

        if !errors.is_empty() {
            tracing::debug!(user_id = %id, %errors, "Patch rejected");
            return Err(AppError::UnprocessableEntity(errors));
        }

        patched.apply_to(&mut user);
        repo.update(&user).await?;
        tracing::info!(user_id = %id, operations = operations.len(), "User patched");

        Ok(())
    }

    /// Delete user by ID
    pub async fn delete_user(repo: &dyn UserRepository, id: &Uuid) -> AppResult<()> {
        Self::get_user_by_id(repo, id).await?;
        repo.delete(id).await?;
        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }

    /// List users with pagination
    pub async fn list_users(repo: &dyn UserRepository, page: PageRequest) -> AppResult<Vec<UserEntity>> {
        repo.get_page(page).await
    }
}
