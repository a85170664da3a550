//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `error_boundary` - Renders every failed request as the JSON error envelope
//! - `fallbacks` - Unknown routes, unsupported methods, timeouts and panics

pub mod error_boundary;
pub mod fallbacks;

pub use error_boundary::{error_boundary_middleware, ErrorBoundaryState};
pub use fallbacks::{method_not_allowed, panic_response, route_not_found, timeout_error_handler};
