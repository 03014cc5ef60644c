//! Route definitions for messages.
//!
//! Mounted under `/api` by `api_routes()` / `memory_api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{memory_messages, messages};
use crate::state::{AppState, MemoryState};

/// Message routes backed by PostgreSQL.
///
/// ```text
/// GET    /messages/          -> list_messages
/// POST   /messages/          -> create_message
/// GET    /messages/{id}      -> get_message
/// PATCH  /messages/{id}      -> update_message
/// DELETE /messages/{id}      -> delete_message
/// ```
pub fn router() -> Router<AppState> {
    let collection = get(messages::list_messages).post(messages::create_message);

    Router::new()
        .route("/messages/", collection.clone())
        .route("/messages", collection)
        .route(
            "/messages/{id}",
            get(messages::get_message)
                .patch(messages::update_message)
                .delete(messages::delete_message),
        )
}

/// Message routes backed by the in-memory store. Same paths as [`router`].
pub fn memory_router() -> Router<MemoryState> {
    let collection =
        get(memory_messages::list_messages).post(memory_messages::create_message);

    Router::new()
        .route("/messages/", collection.clone())
        .route("/messages", collection)
        .route(
            "/messages/{id}",
            get(memory_messages::get_message)
                .patch(memory_messages::update_message)
                .delete(memory_messages::delete_message),
        )
}
