//! # Error type for the HTTP handlers
//!
//! [`ApiError`] is what every handler returns on failure. Its
//! [`IntoResponse`] implementation produces a status code and nothing else:
//!
//! | Variant | Status |
//! |---------|--------|
//! | [`ApiError::BadRequest`] | `400` |
//! | [`ApiError::NotFound`] | `404` |
//! | [`ApiError::Store`] | `500` |
//!
//! Storage failures are logged with their cause before being flattened into a
//! bare `500`. Unsupported methods never reach a handler; the route table
//! answers them with `405`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::db::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Undecodable body, invalid path identifier or missing required field.
    #[error("bad request")]
    BadRequest,
    /// No row matched the identity.
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Store(e) = &self {
            tracing::error!("Storage operation failed: {}", e);
        }
        self.status().into_response()
    }
}
