//! PatchUserHandler - Command handler for partial profile updates.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{ProfilePatch, UserProfile};
use crate::ports::UserRepository;

/// Command to update a subset of a user's fields.
#[derive(Debug, Clone)]
pub struct PatchUserCommand {
    pub user_id: UserId,
    pub patch: ProfilePatch,
}

/// Handler for patching users.
pub struct PatchUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl PatchUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: PatchUserCommand) -> Result<UserProfile, DomainError> {
        self.repository
            .patch_fields(&cmd.user_id, &cmd.patch)
            .await
    }
}
