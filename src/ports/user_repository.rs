//! User repository port (the record store).
//!
//! Defines the contract for the collection of user profiles. Every operation
//! is atomic with respect to every other operation on the same repository;
//! there are no transactions spanning several calls.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{ProfilePatch, UserProfile};

/// Repository port for user profiles.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns a snapshot of all profiles in insertion order.
    async fn list_all(&self) -> Result<Vec<UserProfile>, DomainError>;

    /// Find a profile by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, DomainError>;

    /// Append a new profile.
    ///
    /// # Errors
    ///
    /// - `BusinessRule(DUPLICATE_USER_ID)` if the ID is already present; the
    ///   store is left unchanged
    async fn insert(&self, profile: UserProfile) -> Result<UserProfile, DomainError>;

    /// Overwrite every field of an existing profile except its ID.
    ///
    /// The stored ID is always `id`, whatever `profile` carries.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no profile has this ID
    async fn replace(&self, id: &UserId, profile: UserProfile) -> Result<UserProfile, DomainError>;

    /// Update only the fields present in `patch`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no profile has this ID
    /// - `Validation` if the patch is empty or a provided field is blank; the
    ///   profile is left unchanged
    async fn patch_fields(
        &self,
        id: &UserId,
        patch: &ProfilePatch,
    ) -> Result<UserProfile, DomainError>;

    /// Delete a profile.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no profile has this ID
    async fn remove(&self, id: &UserId) -> Result<(), DomainError>;

    /// Number of stored profiles.
    async fn len(&self) -> Result<usize, DomainError>;
}
