//! HTTP adapters - REST API implementations.
//!
//! - `users` - JSON CRUD endpoints under `/api/v1/users`
//! - `home` - Server-rendered listing page at `/`
//! - `error` - `ApiError`, the response mapper and the error envelope
//! - `middleware` - Error boundary, fallbacks, timeout and panic handling
//! - `app` - Router assembly
//!
//! # Error mapping
//!
//! | Condition | Status | errorCode |
//! |---|---|---|
//! | not found | 404 | `RESOURCE_NOT_FOUND` |
//! | validation | 400 | `VALIDATION_ERROR` |
//! | business rule | 400 | the rule's own code |
//! | missing / invalid argument | 400 | `MISSING_ARGUMENT` / `INVALID_ARGUMENT` |
//! | invalid operation | 400 | `INVALID_OPERATION` |
//! | not implemented | 501 | `NOT_IMPLEMENTED` |
//! | unauthorized | 401 | `UNAUTHORIZED` |
//! | timeout | 408 | `TIMEOUT` |
//! | anything else | 500 | `INTERNAL_ERROR` |

pub mod app;
pub mod error;
pub mod extract;
pub mod home;
pub mod middleware;
pub mod users;

// Re-export key types for convenience
pub use app::build_router;
pub use error::{ApiError, ApiErrorEnvelope, ErrorClassification};
pub use users::{user_routes, UsersAppState};
