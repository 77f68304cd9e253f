//! JSON envelope for item responses.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use time::OffsetDateTime;
use todo_store::Item;

/// Wraps returned items with the response timestamp and result count.
#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub results: Vec<Item>,
    pub date: i64,
    pub total_results: usize,
}

impl TodoResponse {
    /// Stamps the envelope with the current unix time and the result count.
    pub fn new(results: Vec<Item>) -> Self {
        Self {
            date: OffsetDateTime::now_utc().unix_timestamp(),
            total_results: results.len(),
            results,
        }
    }
}

impl IntoResponse for TodoResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
