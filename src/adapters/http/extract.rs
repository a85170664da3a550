//! Request extractors whose rejections are [`ApiError`]s.
//!
//! axum's stock `Json` and `Path` rejections render their own plain-text
//! bodies. These wrappers route every rejection through the error boundary
//! instead.

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::adapters::http::error::ApiError;
use crate::domain::foundation::{DomainError, UserId};

/// JSON body extractor.
///
/// - absent or whitespace-only body → `Validation("Request body is required")`
/// - undecodable body → `Validation` with the decoder's message
///
/// The `Content-Type` header is not inspected.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::InvalidArgument(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(DomainError::validation("Request body is required").into());
        }

        serde_json::from_slice(&bytes)
            .map(ApiJson)
            .map_err(|e| DomainError::validation(format!("Invalid request body: {}", e)).into())
    }
}

/// User ID taken from the `:id` route segment.
///
/// A blank segment is `MissingArgument`; an undecodable one is
/// `InvalidArgument`.
#[derive(Debug, Clone)]
pub struct UserIdPath(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::InvalidArgument(e.body_text()))?;

        UserId::new(raw)
            .map(UserIdPath)
            .map_err(|_| ApiError::MissingArgument("A user ID is required".to_string()))
    }
}
