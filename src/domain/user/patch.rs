//! Partial update of a user profile.

use crate::domain::foundation::{DomainError, FieldErrors};

use super::profile::{fields, require_text};

/// The set of mutable profile fields a patch may carry.
///
/// The identifier is deliberately absent: it cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub full_name: Option<String>,
    pub emoji: Option<String>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.emoji.is_none()
    }

    /// Checks the patch is non-empty and every provided field is non-blank.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.is_empty() {
            return Err(DomainError::validation(
                "No valid fields provided for update. Allowed fields: fullName, emoji",
            ));
        }

        let mut errors = FieldErrors::new();
        if let Some(full_name) = &self.full_name {
            require_text(&mut errors, fields::FULL_NAME, full_name);
        }
        if let Some(emoji) = &self.emoji {
            require_text(&mut errors, fields::EMOJI, emoji);
        }
        if !errors.is_empty() {
            return Err(DomainError::validation_with_fields(
                "One or more validation errors occurred",
                errors,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_is_rejected_without_field_errors() {
        match ProfilePatch::default().validate().unwrap_err() {
            DomainError::Validation { field_errors, .. } => assert!(field_errors.is_empty()),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn blank_field_is_reported_under_wire_name() {
        let patch = ProfilePatch {
            full_name: Some("  ".to_string()),
            emoji: None,
        };
        match patch.validate().unwrap_err() {
            DomainError::Validation { field_errors, .. } => {
                assert!(field_errors.get("fullName").is_some());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn single_valid_field_passes() {
        let patch = ProfilePatch {
            full_name: None,
            emoji: Some("🚀".to_string()),
        };
        assert!(patch.validate().is_ok());
    }
}
