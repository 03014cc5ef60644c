use std::sync::Arc;

use msgapi_core::message_store::MessageManager;

use crate::config::ServerConfig;

/// Shared state for the `postgres` backend, available to handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: msgapi_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

/// Shared state for the `memory` backend.
#[derive(Clone)]
pub struct MemoryState {
    /// The message store. Owned here; nothing else holds messages.
    pub messages: Arc<MessageManager>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
