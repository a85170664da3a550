//! UserProfile aggregate.

use crate::domain::foundation::{DomainError, FieldErrors, UserId};

use super::ProfilePatch;

/// Wire names of the profile fields, used as keys in field errors.
pub mod fields {
    pub const ID: &str = "id";
    pub const FULL_NAME: &str = "fullName";
    pub const EMOJI: &str = "emoji";
}

/// A user profile: identifier, display name and emoji.
///
/// The identifier is fixed at construction; name and emoji may be replaced or
/// patched but never set to a blank value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    id: UserId,
    full_name: String,
    emoji: String,
}

impl UserProfile {
    /// Creates a profile, collecting one field error per blank field.
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        let full_name = full_name.into();
        let emoji = emoji.into();

        let mut errors = FieldErrors::new();
        require_text(&mut errors, fields::ID, &id);
        require_text(&mut errors, fields::FULL_NAME, &full_name);
        require_text(&mut errors, fields::EMOJI, &emoji);
        if !errors.is_empty() {
            return Err(DomainError::validation_with_fields(
                "One or more validation errors occurred",
                errors,
            ));
        }

        Ok(Self {
            id: UserId::new(id)?,
            full_name,
            emoji,
        })
    }

    /// Creates a profile under an existing identifier.
    ///
    /// Used by replace, where the identifier comes from the route rather than
    /// from the payload.
    pub fn with_id(
        id: UserId,
        full_name: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let full_name = full_name.into();
        let emoji = emoji.into();

        let mut errors = FieldErrors::new();
        require_text(&mut errors, fields::FULL_NAME, &full_name);
        require_text(&mut errors, fields::EMOJI, &emoji);
        if !errors.is_empty() {
            return Err(DomainError::validation_with_fields(
                "One or more validation errors occurred",
                errors,
            ));
        }

        Ok(Self {
            id,
            full_name,
            emoji,
        })
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    /// Overwrites name and emoji from another profile, keeping this identifier.
    pub fn replace_fields(&mut self, other: UserProfile) {
        self.full_name = other.full_name;
        self.emoji = other.emoji;
    }

    /// Applies a patch after validating it in full.
    ///
    /// Either every provided field is written or none is.
    pub fn apply_patch(&mut self, patch: &ProfilePatch) -> Result<(), DomainError> {
        patch.validate()?;

        if let Some(full_name) = &patch.full_name {
            self.full_name = full_name.clone();
        }
        if let Some(emoji) = &patch.emoji {
            self.emoji = emoji.clone();
        }
        Ok(())
    }
}

pub(super) fn require_text(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, format!("The {} field is required", field));
    }
}
