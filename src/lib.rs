//! HTTP CRUD API for todo records.
//!
//! Five handlers map the `/todos` routes onto one storage operation each;
//! the storage engine sits behind the [`store::TodoStore`] trait so tests
//! can run against the in-memory implementation.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

pub mod error;
pub mod handlers;
pub mod models;
pub mod store;

use store::TodoStore;

/// Shared per-request context: a thread-safe handle to the document store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/todos/:id",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .with_state(state)
}
