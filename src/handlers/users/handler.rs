//! User handler implementations

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::{
    constants::{COLLECTION_METHODS, PAGINATION_HEADER, PLACEHOLDER_TOTAL},
    error::AppResult,
    models::PageRequest,
    services::{UpsertOutcome, UserService},
    state::AppState,
    utils::{JsonBody, LinkBuilder, Route},
};

use super::{
    request::{CreateUserRequest, ListUsersQuery, PatchOperation, ReplaceUserRequest},
    response::{PaginationMetadata, UserResponse},
};

/// GET/HEAD /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserResponse>> {
    let user = UserService::get_user_by_id(state.users(), &id).await?;
    Ok(Json(user.into()))
}

/// POST /api/users
///
/// Responds 201 with the new id, linking to the retrieve route.
pub async fn create_user(
    State(state): State<AppState>,
    links: LinkBuilder,
    JsonBody(payload): JsonBody<CreateUserRequest>,
) -> AppResult<Response> {
    let user = UserService::create_user(state.users(), payload).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, links.uri_for(Route::GetUser(user.id)))],
        Json(user.id),
    )
        .into_response())
}

/// PUT /api/users/{id}
///
/// 204 when an existing user was replaced. 201 when the id was new; the
/// Location then points at this same PUT route since the client chose the id.
pub async fn replace_user(
    State(state): State<AppState>,
    links: LinkBuilder,
    Path(id): Path<Uuid>,
    JsonBody(payload): JsonBody<ReplaceUserRequest>,
) -> AppResult<Response> {
    let response = match UserService::replace_user(state.users(), id, payload).await? {
        UpsertOutcome::Updated => StatusCode::NO_CONTENT.into_response(),
        UpsertOutcome::Inserted(id) => (
            StatusCode::CREATED,
            [(header::LOCATION, links.uri_for(Route::UpdateUser(id)))],
            Json(id),
        )
            .into_response(),
    };

    Ok(response)
}

/// PATCH /api/users/{id}
pub async fn patch_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    JsonBody(document): JsonBody<Vec<PatchOperation>>,
) -> AppResult<StatusCode> {
    UserService::patch_user(state.users(), &id, document).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    UserService::delete_user(state.users(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/users
///
/// Pagination metadata travels in the `X-Pagination` header, the body is the
/// bare array of users.
pub async fn list_users(
    State(state): State<AppState>,
    links: LinkBuilder,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<impl IntoResponse> {
    let page = PageRequest::new(query.page_number, query.page_size);
    let users = UserService::list_users(state.users(), page).await?;

    let metadata = PaginationMetadata {
        previous_page_link: page.previous().map(|p| links.uri_for(Route::ListUsers(p))),
        next_page_link: links.uri_for(Route::ListUsers(page.next())),
        total_count: PLACEHOLDER_TOTAL,
        page_size: page.page_size,
        current_page: page.page_number,
        total_pages: PLACEHOLDER_TOTAL,
    };
    let metadata = serde_json::to_string(&metadata).map_err(anyhow::Error::from)?;

    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(([(PAGINATION_HEADER, metadata)], Json(users)))
}

/// OPTIONS /api/users
pub async fn collection_options() -> impl IntoResponse {
    (StatusCode::OK, [(header::ALLOW, COLLECTION_METHODS.join(", "))])
}
