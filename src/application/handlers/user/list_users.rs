//! ListUsersHandler - Query handler for listing every user profile.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::user::UserProfile;
use crate::ports::UserRepository;

/// Handler for listing users.
pub struct ListUsersHandler {
    repository: Arc<dyn UserRepository>,
}

impl ListUsersHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<UserProfile>, DomainError> {
        self.repository.list_all().await
    }
}
