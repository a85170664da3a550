//! CreateUserHandler - Command handler for creating user profiles.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::user::UserProfile;
use crate::ports::UserRepository;

/// Command to create a user.
///
/// Missing payload fields arrive as empty strings and fail validation.
#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub id: String,
    pub full_name: String,
    pub emoji: String,
}

/// Handler for creating users.
pub struct CreateUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl CreateUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateUserCommand) -> Result<UserProfile, DomainError> {
        // 1. Validate and build the profile
        let profile = UserProfile::new(cmd.id, cmd.full_name, cmd.emoji)?;

        // 2. Insert; duplicate IDs are rejected by the store
        let created = self.repository.insert(profile).await?;

        tracing::info!(user_id = %created.id(), "User created");
        Ok(created)
    }
}
