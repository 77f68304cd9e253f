//! API error type and its HTTP mapping.
//!
//! # Design
//! Two client-visible failure kinds — invalid data (400) and not found (404) —
//! plus a 500 bucket for persistence and channel failures. The response body
//! is always the status's canonical reason phrase: the full error is logged
//! server-side and never leaked to the client.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use todo_store::StoreError;

/// Errors produced by the request handlers and the store task.
#[derive(Debug)]
pub enum ApiError {
    /// The request carried a malformed id or body.
    InvalidData(String),

    /// The id or route does not address anything that exists.
    NotFound(String),

    /// The todo file could not be loaded or saved.
    Store(StoreError),

    /// The store task is unreachable.
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidData(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
            ApiError::NotFound(msg) => write!(f, "not found: {msg}"),
            ApiError::Store(err) => write!(f, "store failure: {err}"),
            ApiError::Internal(msg) => write!(f, "internal failure: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// An out-of-range id means the addressed item does not exist; everything
/// else the store reports is a persistence failure.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::OutOfRange { id, .. } => ApiError::NotFound(format!("no item with id {id}")),
            other => ApiError::Store(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{status}: {self}");
        } else {
            tracing::debug!("{status}: {self}");
        }
        let reason = status.canonical_reason().unwrap_or("");
        (status, reason).into_response()
    }
}
