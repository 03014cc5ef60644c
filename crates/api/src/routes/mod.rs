pub mod categories;
pub mod health;
pub mod messages;

use axum::Router;

use crate::state::{AppState, MemoryState};

/// Build the `/api` route tree for the `postgres` backend.
///
/// Route hierarchy:
///
/// ```text
/// /messages/                    list, create
/// /messages/{id}                get, partial update, delete
///
/// /categories/                  list, create
/// /categories/{id}              get, partial update, delete (cascades)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(messages::router())
        .merge(categories::router())
}

/// Build the `/api` route tree for the `memory` backend.
///
/// ```text
/// /messages/                    list, create
/// /messages/{id}                get, partial update, delete
/// ```
pub fn memory_api_routes() -> Router<MemoryState> {
    messages::memory_router()
}
