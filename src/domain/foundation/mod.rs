//! Foundation module - Shared domain primitives.
//!
//! Contains the error taxonomy, identifiers and value objects used across
//! the domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, FieldErrors, RuleCode};
pub use ids::UserId;
pub use timestamp::Timestamp;
