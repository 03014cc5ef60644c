//! Message handlers for the `memory` backend.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use msgapi_core::message::{CreateMessageRequest, MessagePatch};
use msgapi_core::types::DbId;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::handlers::message_not_found;
use crate::resource::MemoryMessageResource;
use crate::state::MemoryState;

/// GET /api/messages/
///
/// List all messages in insertion order.
pub async fn list_messages(State(state): State<MemoryState>) -> AppResult<impl IntoResponse> {
    let links = state.config.links();
    let messages: Vec<_> = state
        .messages
        .list()
        .await
        .into_iter()
        .map(|m| MemoryMessageResource::new(m, &links))
        .collect();

    Ok(Json(messages))
}

/// POST /api/messages/
///
/// Validate the payload, then store a new message.
pub async fn create_message(
    State(state): State<MemoryState>,
    AppJson(input): AppJson<CreateMessageRequest>,
) -> AppResult<impl IntoResponse> {
    let new = input.into_new()?;
    let model = state.messages.insert(new).await;

    tracing::info!(
        message_id = model.id,
        category = %model.message_category,
        "Message created"
    );

    Ok((
        StatusCode::CREATED,
        Json(MemoryMessageResource::new(model, &state.config.links())),
    ))
}

/// GET /api/messages/{id}
pub async fn get_message(
    State(state): State<MemoryState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let model = state
        .messages
        .get(id)
        .await
        .ok_or_else(|| message_not_found(id))?;

    Ok(Json(MemoryMessageResource::new(model, &state.config.links())))
}

/// PATCH /api/messages/{id}
///
/// Apply only the supplied fields.
pub async fn update_message(
    State(state): State<MemoryState>,
    AppPath(id): AppPath<DbId>,
    AppJson(patch): AppJson<MessagePatch>,
) -> AppResult<impl IntoResponse> {
    let current = state
        .messages
        .get(id)
        .await
        .ok_or_else(|| message_not_found(id))?;
    patch.check()?;

    if patch.is_empty() {
        return Ok(Json(MemoryMessageResource::new(current, &state.config.links())));
    }

    let model = state
        .messages
        .update(id, &patch)
        .await
        .ok_or_else(|| message_not_found(id))?;

    tracing::info!(message_id = id, "Message updated");

    Ok(Json(MemoryMessageResource::new(model, &state.config.links())))
}

/// DELETE /api/messages/{id}
pub async fn delete_message(
    State(state): State<MemoryState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !state.messages.delete(id).await {
        return Err(message_not_found(id));
    }

    tracing::info!(message_id = id, "Message deleted");

    Ok(StatusCode::NO_CONTENT)
}
