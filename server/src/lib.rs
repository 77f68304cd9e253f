//! HTTP service over a file-backed todo list.
//!
//! # Overview
//! Routes CRUD requests onto a single JSON file of `{task, done}` items,
//! addressed by 1-based position. Every collection operation reloads the file,
//! mutates in memory, and rewrites the whole file, serialized through the
//! single-writer store task in [`state`].
//!
//! # Design
//! - `app` builds the router; `run` serves it. The split lets integration
//!   tests drive the router in-process without a socket.
//! - Responses wrap items in a `{results, date, total_results}` envelope;
//!   errors reply with the bare status reason phrase and log the detail.

pub mod error;
pub mod handlers;
pub mod response;
pub mod state;

pub use error::ApiError;
pub use response::TodoResponse;
pub use state::StoreHandle;

use std::path::PathBuf;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

/// Builds the router serving the todo collection backed by `todo_file`.
pub fn app(todo_file: impl Into<PathBuf>) -> Router {
    let store = StoreHandle::spawn(todo_file.into());
    Router::new()
        .route("/", get(handlers::root))
        .route("/todo", get(handlers::list_all).post(handlers::create))
        .route("/todo/", get(handlers::list_all).post(handlers::create))
        .route(
            "/todo/{id}",
            get(handlers::get_one)
                .delete(handlers::delete_one)
                .patch(handlers::complete_one),
        )
        .fallback(handlers::not_found)
        .with_state(store)
}

pub async fn run(
    listener: TcpListener,
    todo_file: impl Into<PathBuf>,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app(todo_file)).await
}
