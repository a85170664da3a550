//! Error boundary middleware.
//!
//! The single place where failures become wire responses. Any response marked
//! with an [`ApiError`] (see `ApiError::into_response`) is rewritten into the
//! JSON envelope carrying the request path, a fresh timestamp and, outside
//! production, a diagnostic.
//!
//! ```text
//! Request → error_boundary_middleware → ... → handler
//!                    ↑                            │
//!                    └── marked response ◄────────┘ Err(ApiError)
//! ```

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::adapters::http::error::ApiError;
use crate::config::Environment;

/// Error boundary state.
#[derive(Debug, Clone, Copy)]
pub struct ErrorBoundaryState {
    include_diagnostics: bool,
}

impl ErrorBoundaryState {
    /// Diagnostics are included everywhere except production.
    pub fn for_environment(environment: &Environment) -> Self {
        Self {
            include_diagnostics: *environment != Environment::Production,
        }
    }

    pub fn include_diagnostics(&self) -> bool {
        self.include_diagnostics
    }
}

/// Rewrites marked error responses into the uniform envelope.
///
/// Responses not produced from an `ApiError` pass through untouched. Headers
/// already set on the marked response (request id, CORS) are kept.
pub async fn error_boundary_middleware(
    State(state): State<ErrorBoundaryState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    let Some(error) = response.extensions_mut().remove::<ApiError>() else {
        return response;
    };

    let classification = error.classify();
    if classification.status.is_server_error() {
        tracing::error!(
            %method,
            %path,
            status = classification.status.as_u16(),
            error_code = %classification.error_code,
            diagnostic = %error.diagnostic(),
            "Request failed with unhandled error"
        );
    } else {
        tracing::warn!(
            %method,
            %path,
            status = classification.status.as_u16(),
            error_code = %classification.error_code,
            "Request failed: {}",
            error
        );
    }

    let envelope = error.to_envelope(path, state.include_diagnostics);
    let mut rendered = envelope.into_response_with(classification.status);

    let (parts, _) = response.into_parts();
    for (name, value) in parts.headers.iter() {
        if *name == header::CONTENT_TYPE || *name == header::CONTENT_LENGTH {
            continue;
        }
        rendered.headers_mut().append(name.clone(), value.clone());
    }
    rendered
}
