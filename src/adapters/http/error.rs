//! API error type, response mapper and the JSON error envelope.
//!
//! Handlers return `Result<_, ApiError>`. Converting an `ApiError` into a
//! response marks the response with the error value; the error boundary
//! middleware then renders the final [`ApiErrorEnvelope`] with the request
//! path and, outside production, a diagnostic.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::domain::foundation::{DomainError, Timestamp};

// ════════════════════════════════════════════════════════════════════════════
// Error codes
// ════════════════════════════════════════════════════════════════════════════

/// Stable machine-readable error codes.
pub mod codes {
    pub const RESOURCE_NOT_FOUND: &str = "RESOURCE_NOT_FOUND";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const MISSING_ARGUMENT: &str = "MISSING_ARGUMENT";
    pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
    pub const INVALID_OPERATION: &str = "INVALID_OPERATION";
    pub const NOT_IMPLEMENTED: &str = "NOT_IMPLEMENTED";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const TIMEOUT: &str = "TIMEOUT";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

// ════════════════════════════════════════════════════════════════════════════
// ApiError
// ════════════════════════════════════════════════════════════════════════════

/// Every failure a request can end in.
///
/// `Domain` carries the taxonomy errors; the remaining variants are the generic
/// classes raised by the HTTP plumbing itself. `Internal` is the catch-all for
/// unclassified failures.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("{0}")]
    MissingArgument(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    InvalidOperation(String),

    #[error("{0}")]
    NotImplemented(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Timeout(String),

    #[error("{message}")]
    Internal { message: String, diagnostic: String },
}

impl ApiError {
    /// Wraps an unclassified failure. The caller-facing message stays generic;
    /// the failure's text is kept as diagnostic only.
    pub fn internal(diagnostic: impl Into<String>) -> Self {
        ApiError::Internal {
            message: "An unexpected error occurred while processing the request".to_string(),
            diagnostic: diagnostic.into(),
        }
    }

    /// Maps the error to its status, code and structured details.
    ///
    /// Total over every variant; see the table in the module docs of
    /// [`crate::adapters::http`].
    pub fn classify(&self) -> ErrorClassification {
        match self {
            ApiError::Domain(DomainError::NotFound {
                resource_type,
                resource_id,
            }) => ErrorClassification::new(StatusCode::NOT_FOUND, codes::RESOURCE_NOT_FOUND)
                .with_details(json!({
                    "resourceType": resource_type,
                    "resourceId": resource_id,
                })),
            ApiError::Domain(DomainError::Validation { field_errors, .. }) => {
                let classification =
                    ErrorClassification::new(StatusCode::BAD_REQUEST, codes::VALIDATION_ERROR);
                match serde_json::to_value(field_errors) {
                    Ok(details) if !field_errors.is_empty() => classification.with_details(details),
                    _ => classification,
                }
            }
            ApiError::Domain(DomainError::BusinessRule { rule_code, .. }) => {
                ErrorClassification::new(StatusCode::BAD_REQUEST, rule_code.clone())
            }
            ApiError::MissingArgument(_) => {
                ErrorClassification::new(StatusCode::BAD_REQUEST, codes::MISSING_ARGUMENT)
            }
            ApiError::InvalidArgument(_) => {
                ErrorClassification::new(StatusCode::BAD_REQUEST, codes::INVALID_ARGUMENT)
            }
            ApiError::InvalidOperation(_) => {
                ErrorClassification::new(StatusCode::BAD_REQUEST, codes::INVALID_OPERATION)
            }
            ApiError::NotImplemented(_) => {
                ErrorClassification::new(StatusCode::NOT_IMPLEMENTED, codes::NOT_IMPLEMENTED)
            }
            ApiError::Unauthorized(_) => {
                ErrorClassification::new(StatusCode::UNAUTHORIZED, codes::UNAUTHORIZED)
            }
            ApiError::Timeout(_) => {
                ErrorClassification::new(StatusCode::REQUEST_TIMEOUT, codes::TIMEOUT)
            }
            ApiError::Internal { .. } => {
                ErrorClassification::new(StatusCode::INTERNAL_SERVER_ERROR, codes::INTERNAL_ERROR)
            }
        }
    }

    /// Raw diagnostic text for non-production responses.
    pub fn diagnostic(&self) -> String {
        match self {
            ApiError::Internal { diagnostic, .. } => diagnostic.clone(),
            other => format!("{:?}", other),
        }
    }

    /// Renders the envelope for this error at `path`.
    ///
    /// With `include_diagnostics`, a classification without structured details
    /// gets the diagnostic text as its details.
    pub fn to_envelope(&self, path: impl Into<String>, include_diagnostics: bool) -> ApiErrorEnvelope {
        let classification = self.classify();
        let details = match classification.details {
            Some(details) => Some(details),
            None if include_diagnostics => Some(Value::String(self.diagnostic())),
            None => None,
        };

        ApiErrorEnvelope {
            error_code: classification.error_code,
            message: self.to_string(),
            details,
            timestamp: Timestamp::now(),
            path: path.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Path and diagnostics are filled in by the error boundary.
        let status = self.classify().status;
        let envelope = self.to_envelope(String::new(), false);
        let mut response = (status, Json(envelope)).into_response();
        response.extensions_mut().insert(self);
        response
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Classification and envelope
// ════════════════════════════════════════════════════════════════════════════

/// Result of mapping an [`ApiError`].
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorClassification {
    pub status: StatusCode,
    pub error_code: String,
    pub details: Option<Value>,
}

impl ErrorClassification {
    fn new(status: StatusCode, error_code: impl Into<String>) -> Self {
        Self {
            status,
            error_code: error_code.into(),
            details: None,
        }
    }

    fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Uniform JSON body of every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorEnvelope {
    pub error_code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    pub timestamp: Timestamp,
    pub path: String,
}

impl ApiErrorEnvelope {
    /// Serializes the envelope into a response with the given status.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        match serde_json::to_vec(&self) {
            Ok(body) => (
                status,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!("Failed to serialize error envelope: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
