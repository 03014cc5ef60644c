//! Message handlers for the `postgres` backend.
//!
//! Same contract as the memory handlers, except that each message
//! references a `category` row and the text is bounded to 250 characters.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use msgapi_core::message::{validate_message_length, CreateMessageRequest, MessagePatch};
use msgapi_core::types::DbId;
use msgapi_db::repositories::MessageRepo;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::handlers::message_not_found;
use crate::resource::MessageResource;
use crate::state::AppState;

/// GET /api/messages/
pub async fn list_messages(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let links = state.config.links();
    let messages: Vec<_> = MessageRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|m| MessageResource::new(m, &links))
        .collect();

    Ok(Json(messages))
}

/// POST /api/messages/
///
/// Validate the payload, including the name rules for a category the
/// message may create, then insert the message (creating its category if
/// this is the first message naming it).
pub async fn create_message(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMessageRequest>,
) -> AppResult<impl IntoResponse> {
    let new = input.into_new()?;
    new.check_persisted()?;

    let row = MessageRepo::create(&state.pool, &new).await?;

    tracing::info!(
        message_id = row.id,
        category_id = row.category_id,
        "Message created"
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResource::new(row, &state.config.links())),
    ))
}

/// GET /api/messages/{id}
pub async fn get_message(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = MessageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| message_not_found(id))?;

    Ok(Json(MessageResource::new(row, &state.config.links())))
}

/// PATCH /api/messages/{id}
pub async fn update_message(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(patch): AppJson<MessagePatch>,
) -> AppResult<impl IntoResponse> {
    let current = MessageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| message_not_found(id))?;
    patch.check()?;
    if let Some(message) = &patch.message {
        validate_message_length(message)?;
    }

    if patch.is_empty() {
        return Ok(Json(MessageResource::new(current, &state.config.links())));
    }

    let row = MessageRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| message_not_found(id))?;

    tracing::info!(message_id = id, "Message updated");

    Ok(Json(MessageResource::new(row, &state.config.links())))
}

/// DELETE /api/messages/{id}
pub async fn delete_message(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = MessageRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(message_not_found(id));
    }

    tracing::info!(message_id = id, "Message deleted");

    Ok(StatusCode::NO_CONTENT)
}
