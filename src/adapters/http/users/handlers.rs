//! HTTP handlers for user endpoints.
//!
//! Handlers never build error responses themselves: failures are returned as
//! [`ApiError`] and rendered by the error boundary.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::{ApiJson, UserIdPath};
use crate::application::handlers::user::{
    CreateUserCommand, CreateUserHandler, DeleteUserCommand, DeleteUserHandler, GetUserHandler,
    GetUserQuery, ListUsersHandler, PatchUserCommand, PatchUserHandler, ReplaceUserCommand,
    ReplaceUserHandler,
};
use crate::ports::UserRepository;

use super::dto::{PatchUserRequest, UserProfileRequest, UserProfileResponse};
use super::routes::{user_location, USERS_PATH};

// ════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════

/// Shared state for the user endpoints.
///
/// Cloned for each request; the repository is shared behind an `Arc`.
#[derive(Clone)]
pub struct UsersAppState {
    pub repository: Arc<dyn UserRepository>,
}

impl UsersAppState {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub fn list_handler(&self) -> ListUsersHandler {
        ListUsersHandler::new(self.repository.clone())
    }

    pub fn get_handler(&self) -> GetUserHandler {
        GetUserHandler::new(self.repository.clone())
    }

    pub fn create_handler(&self) -> CreateUserHandler {
        CreateUserHandler::new(self.repository.clone())
    }

    pub fn replace_handler(&self) -> ReplaceUserHandler {
        ReplaceUserHandler::new(self.repository.clone())
    }

    pub fn patch_handler(&self) -> PatchUserHandler {
        PatchUserHandler::new(self.repository.clone())
    }

    pub fn delete_handler(&self) -> DeleteUserHandler {
        DeleteUserHandler::new(self.repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/v1/users - List all users
pub async fn list_users(
    State(state): State<UsersAppState>,
) -> Result<Json<Vec<UserProfileResponse>>, ApiError> {
    tracing::info!("GET {} endpoint called", USERS_PATH);
    let users = state.list_handler().handle().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/users/:id - Get a user by ID
pub async fn get_user(
    State(state): State<UsersAppState>,
    UserIdPath(user_id): UserIdPath,
) -> Result<Json<UserProfileResponse>, ApiError> {
    let user = state.get_handler().handle(GetUserQuery { user_id }).await?;
    Ok(Json(user.into()))
}

/// POST /api/v1/users - Create a user
pub async fn create_user(
    State(state): State<UsersAppState>,
    ApiJson(req): ApiJson<UserProfileRequest>,
) -> Result<Response, ApiError> {
    let cmd = CreateUserCommand {
        id: req.id.unwrap_or_default(),
        full_name: req.full_name.unwrap_or_default(),
        emoji: req.emoji.unwrap_or_default(),
    };

    let created = state.create_handler().handle(cmd).await?;
    let location = user_location(created.id());
    let body = Json(UserProfileResponse::from(created));

    match HeaderValue::from_str(&location) {
        Ok(value) => Ok((StatusCode::CREATED, [(header::LOCATION, value)], body).into_response()),
        Err(_) => {
            tracing::warn!(%location, "Location is not a valid header value; omitting");
            Ok((StatusCode::CREATED, body).into_response())
        }
    }
}

/// PUT /api/v1/users/:id - Replace a user's name and emoji
pub async fn replace_user(
    State(state): State<UsersAppState>,
    UserIdPath(user_id): UserIdPath,
    ApiJson(req): ApiJson<UserProfileRequest>,
) -> Result<Json<UserProfileResponse>, ApiError> {
    if let Some(body_id) = req.id.as_deref() {
        if body_id != user_id.as_str() {
            tracing::debug!(%user_id, body_id, "Ignoring ID in replace payload");
        }
    }

    let cmd = ReplaceUserCommand {
        user_id,
        full_name: req.full_name.unwrap_or_default(),
        emoji: req.emoji.unwrap_or_default(),
    };

    let updated = state.replace_handler().handle(cmd).await?;
    Ok(Json(updated.into()))
}

/// PATCH /api/v1/users/:id - Update name and/or emoji
pub async fn patch_user(
    State(state): State<UsersAppState>,
    UserIdPath(user_id): UserIdPath,
    ApiJson(req): ApiJson<PatchUserRequest>,
) -> Result<Json<UserProfileResponse>, ApiError> {
    let patch = req.into_patch()?;
    let updated = state
        .patch_handler()
        .handle(PatchUserCommand { user_id, patch })
        .await?;
    Ok(Json(updated.into()))
}

/// DELETE /api/v1/users/:id - Delete a user
pub async fn delete_user(
    State(state): State<UsersAppState>,
    UserIdPath(user_id): UserIdPath,
) -> Result<StatusCode, ApiError> {
    state
        .delete_handler()
        .handle(DeleteUserCommand { user_id })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryUserRepository;
    use crate::domain::foundation::{DomainError, UserId};
    use crate::domain::user::sample_profiles;

    fn test_state() -> UsersAppState {
        UsersAppState::new(Arc::new(InMemoryUserRepository::with_profiles(
            sample_profiles().unwrap(),
        )))
    }

    fn path(id: &str) -> UserIdPath {
        UserIdPath(UserId::new(id).unwrap())
    }

    fn body(id: Option<&str>, name: &str, emoji: &str) -> ApiJson<UserProfileRequest> {
        ApiJson(UserProfileRequest {
            id: id.map(str::to_string),
            full_name: Some(name.to_string()),
            emoji: Some(emoji.to_string()),
        })
    }

    #[tokio::test]
    async fn list_users_returns_all() {
        let Json(users) = list_users(State(test_state())).await.unwrap();
        assert_eq!(users.len(), 3);
    }

    #[tokio::test]
    async fn get_user_missing_is_not_found() {
        let err = get_user(State(test_state()), path("9")).await.unwrap_err();
        assert!(matches!(err, ApiError::Domain(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn create_user_sets_created_and_location() {
        let response = create_user(State(test_state()), body(Some("4"), "Ann", "🌸"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::LOCATION], "/api/v1/users/4");
    }

    #[tokio::test]
    async fn replace_user_ignores_body_id() {
        let state = test_state();
        let Json(updated) = replace_user(State(state.clone()), path("1"), body(Some("other"), "J", "🤠"))
            .await
            .unwrap();
        assert_eq!(updated.id, "1");
    }

    #[tokio::test]
    async fn patch_user_rejects_id_only_bag() {
        let mut bag = serde_json::Map::new();
        bag.insert("id".to_string(), serde_json::json!("5"));

        let err = patch_user(State(test_state()), path("1"), ApiJson(PatchUserRequest(bag)))
            .await
            .unwrap_err();
        assert_eq!(err.classify().error_code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn delete_user_returns_no_content() {
        let status = delete_user(State(test_state()), path("3")).await.unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
    }
}
