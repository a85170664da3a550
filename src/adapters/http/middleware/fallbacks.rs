//! Failure sources outside the handlers: unknown routes, unsupported methods,
//! elapsed request budgets and panics. Each produces an [`ApiError`] so the
//! error boundary renders it like any handler failure.

use std::any::Any;
use std::time::Duration;

use axum::{
    http::{Method, Uri},
    response::{IntoResponse, Response},
    BoxError,
};

use crate::adapters::http::error::ApiError;
use crate::domain::foundation::DomainError;

/// Router fallback for paths no route matches.
pub async fn route_not_found(uri: Uri) -> ApiError {
    DomainError::not_found("Route", uri.path()).into()
}

/// Method fallback for known paths.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::InvalidOperation(format!(
        "Method {} is not supported for {}",
        method,
        uri.path()
    ))
}

/// Builds the error handler for the timeout layer.
///
/// Returns a closure so the configured budget appears in the message.
pub fn timeout_error_handler(
    budget: Duration,
) -> impl Fn(BoxError) -> std::future::Ready<ApiError> + Clone + Send + Sync + 'static {
    move |err: BoxError| std::future::ready(classify_middleware_error(err, budget))
}

fn classify_middleware_error(err: BoxError, budget: Duration) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ApiError::Timeout(format!(
            "The request did not complete within {} seconds",
            budget.as_secs()
        ))
    } else {
        ApiError::internal(format!("Unhandled middleware error: {}", err))
    }
}

/// Panic handler for the catch-panic layer.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::internal(format!("Handler panicked: {}", detail)).into_response()
}
