//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (error taxonomy, IDs, timestamps)
//! - `user` - User profile aggregate and its partial update

pub mod foundation;
pub mod user;
