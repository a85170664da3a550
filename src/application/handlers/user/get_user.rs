//! GetUserHandler - Query handler for retrieving a single user profile.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::UserProfile;
use crate::ports::UserRepository;

/// Query to get a user by ID.
#[derive(Debug, Clone)]
pub struct GetUserQuery {
    pub user_id: UserId,
}

/// Handler for retrieving a user.
pub struct GetUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl GetUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetUserQuery) -> Result<UserProfile, DomainError> {
        self.repository
            .find_by_id(&query.user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", query.user_id.as_str()))
    }
}
