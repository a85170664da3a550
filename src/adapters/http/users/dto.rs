//! HTTP DTOs for user endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::{DomainError, FieldErrors};
use crate::domain::user::{fields, ProfilePatch, UserProfile};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Full profile payload for create and replace.
///
/// Every field is optional at the decoding stage so that missing fields are
/// reported as field errors rather than as decoder failures.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
}

/// Field bag for partial updates.
///
/// Decoded explicitly: only `fullName` and `emoji` are accepted, `id` and any
/// other key is rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct PatchUserRequest(pub Map<String, Value>);

impl PatchUserRequest {
    /// Converts the bag into a typed patch.
    ///
    /// `null` values count as "not provided".
    pub fn into_patch(self) -> Result<ProfilePatch, DomainError> {
        let mut patch = ProfilePatch::default();
        let mut errors = FieldErrors::new();

        for (key, value) in self.0 {
            match key.as_str() {
                fields::ID => errors.add(fields::ID, "The id field cannot be modified"),
                fields::FULL_NAME => patch.full_name = string_value(&mut errors, &key, value),
                fields::EMOJI => patch.emoji = string_value(&mut errors, &key, value),
                _ => errors.add(
                    key.clone(),
                    format!(
                        "Unknown field. Allowed fields: {}, {}",
                        fields::FULL_NAME,
                        fields::EMOJI
                    ),
                ),
            }
        }

        if !errors.is_empty() {
            return Err(DomainError::validation_with_fields(
                "The patch contains fields that cannot be updated",
                errors,
            ));
        }
        Ok(patch)
    }
}

fn string_value(errors: &mut FieldErrors, key: &str, value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        _ => {
            errors.add(key, format!("The {} field must be a string", key));
            None
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// User profile as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    pub id: String,
    pub full_name: String,
    pub emoji: String,
}

impl From<UserProfile> for UserProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id().to_string(),
            full_name: profile.full_name().to_string(),
            emoji: profile.emoji().to_string(),
        }
    }
}
