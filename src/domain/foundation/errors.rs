//! Error taxonomy for the domain layer.
//!
//! `DomainError` is the closed set of expected failure conditions. Anything that
//! is not one of these variants is an unclassified failure and is handled at the
//! HTTP boundary.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Per-field validation messages, keyed by the wire name of the field.
///
/// Ordered so that serialized responses are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Creates an empty set of field errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message against a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Builder form of [`FieldErrors::add`].
    pub fn with(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the messages recorded for a field.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Returns the field names that have at least one message.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Business rule codes raised by the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCode {
    DuplicateUserId,
}

impl RuleCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCode::DuplicateUserId => "DUPLICATE_USER_ID",
        }
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected failure conditions raised by the domain and the record store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{resource_type} with ID '{resource_id}' was not found")]
    NotFound {
        resource_type: String,
        resource_id: String,
    },

    #[error("{message}")]
    Validation {
        message: String,
        field_errors: FieldErrors,
    },

    #[error("{message}")]
    BusinessRule { rule_code: String, message: String },
}

impl DomainError {
    /// Creates a not-found error for a resource.
    pub fn not_found(resource_type: impl Into<String>, resource_id: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
        }
    }

    /// Creates a validation error without field-level detail.
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
            field_errors: FieldErrors::new(),
        }
    }

    /// Creates a validation error carrying per-field messages.
    pub fn validation_with_fields(message: impl Into<String>, field_errors: FieldErrors) -> Self {
        DomainError::Validation {
            message: message.into(),
            field_errors,
        }
    }

    /// Creates a business rule violation.
    pub fn business_rule(rule_code: RuleCode, message: impl Into<String>) -> Self {
        DomainError::BusinessRule {
            rule_code: rule_code.as_str().to_string(),
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_resource_and_id() {
        let err = DomainError::not_found("User", "42");
        assert_eq!(format!("{}", err), "User with ID '42' was not found");
    }

    #[test]
    fn validation_displays_message() {
        let err = DomainError::validation("Patch must contain at least one field");
        assert_eq!(format!("{}", err), "Patch must contain at least one field");
        assert!(err.is_validation());
    }

    #[test]
    fn business_rule_uses_rule_code_string() {
        let err = DomainError::business_rule(RuleCode::DuplicateUserId, "dup");
        match err {
            DomainError::BusinessRule { rule_code, message } => {
                assert_eq!(rule_code, "DUPLICATE_USER_ID");
                assert_eq!(message, "dup");
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn field_errors_accumulate_per_field() {
        let errors = FieldErrors::new()
            .with("emoji", "must not be empty")
            .with("emoji", "second")
            .with("fullName", "must not be empty");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("emoji").map(|m| m.len()), Some(2));
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["emoji", "fullName"]);
    }

    #[test]
    fn field_errors_serialize_as_plain_map() {
        let errors = FieldErrors::new().with("id", "cannot be modified");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "id": ["cannot be modified"] }));
    }
}
