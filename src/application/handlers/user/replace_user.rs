//! ReplaceUserHandler - Command handler for full profile replacement.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::UserProfile;
use crate::ports::UserRepository;

/// Command to replace a user's name and emoji.
///
/// Any identifier carried by the request body is ignored; `user_id` comes
/// from the route.
#[derive(Debug, Clone)]
pub struct ReplaceUserCommand {
    pub user_id: UserId,
    pub full_name: String,
    pub emoji: String,
}

/// Handler for replacing users.
pub struct ReplaceUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl ReplaceUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: ReplaceUserCommand) -> Result<UserProfile, DomainError> {
        let replacement = UserProfile::with_id(cmd.user_id.clone(), cmd.full_name, cmd.emoji)?;
        self.repository.replace(&cmd.user_id, replacement).await
    }
}
