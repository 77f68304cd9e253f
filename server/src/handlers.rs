//! Request handlers for the todo API.
//!
//! Ids arrive as raw path segments and are validated here: anything that is
//! not a decimal integer `>= 1` is invalid data (400). Whether an id actually
//! addresses an item is only known to the store task, which owns the current
//! list; its out-of-range answer surfaces as 404.

use axum::extract::{Path, RawQuery, State};
use axum::http::{StatusCode, Uri};
use serde::Deserialize;

use crate::error::ApiError;
use crate::response::TodoResponse;
use crate::state::StoreHandle;

/// Request payload for creating a new item.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub task: String,
}

pub async fn root() -> &'static str {
    tracing::debug!("root greeting");
    "There's an API here\n"
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {uri}"))
}

pub async fn list_all(State(store): State<StoreHandle>) -> Result<TodoResponse, ApiError> {
    tracing::debug!("list all");
    let items = store.list().await?;
    Ok(TodoResponse::new(items))
}

pub async fn get_one(
    State(store): State<StoreHandle>,
    Path(id): Path<String>,
) -> Result<TodoResponse, ApiError> {
    tracing::debug!(%id, "get one");
    let id = parse_id(&id)?;
    let item = store.get(id).await?;
    Ok(TodoResponse::new(vec![item]))
}

/// The body is read raw and decoded by hand so malformed JSON maps to 400.
pub async fn create(
    State(store): State<StoreHandle>,
    body: String,
) -> Result<StatusCode, ApiError> {
    tracing::debug!("create");
    let input: CreateTodo = serde_json::from_str(&body)
        .map_err(|err| ApiError::InvalidData(format!("invalid JSON: {err}")))?;
    store.add(input.task).await?;
    Ok(StatusCode::CREATED)
}

pub async fn delete_one(
    State(store): State<StoreHandle>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    tracing::debug!(%id, "delete one");
    let id = parse_id(&id)?;
    store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn complete_one(
    State(store): State<StoreHandle>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<StatusCode, ApiError> {
    tracing::debug!(%id, "complete one");
    let id = parse_id(&id)?;
    if !has_complete_param(query.as_deref()) {
        return Err(ApiError::InvalidData(
            "missing query parameter 'complete'".to_string(),
        ));
    }
    store.complete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(raw: &str) -> Result<usize, ApiError> {
    let id: usize = raw
        .parse()
        .map_err(|_| ApiError::InvalidData(format!("invalid id: {raw}")))?;
    if id < 1 {
        return Err(ApiError::InvalidData(format!("invalid id, below 1: {id}")));
    }
    Ok(id)
}

/// The `complete` parameter only has to be present; its value is ignored.
fn has_complete_param(query: Option<&str>) -> bool {
    query.is_some_and(|q| {
        q.split('&')
            .any(|pair| pair == "complete" || pair.starts_with("complete="))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_positive_integers() {
        assert_eq!(parse_id("1").unwrap(), 1);
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn parse_id_rejects_zero_negative_and_garbage() {
        assert!(parse_id("0").is_err());
        assert!(parse_id("-3").is_err());
        assert!(parse_id("abc").is_err());
        assert!(parse_id("1.5").is_err());
        assert!(parse_id("").is_err());
    }

    #[test]
    fn complete_param_presence() {
        assert!(has_complete_param(Some("complete")));
        assert!(has_complete_param(Some("complete=1")));
        assert!(has_complete_param(Some("other=x&complete")));
        assert!(!has_complete_param(Some("completed")));
        assert!(!has_complete_param(Some("other=complete")));
        assert!(!has_complete_param(None));
    }
}
