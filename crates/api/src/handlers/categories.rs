//! Category handlers (`postgres` backend only).

use std::collections::HashMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use msgapi_core::category::{CreateCategoryRequest, UpdateCategoryRequest};
use msgapi_core::types::DbId;
use msgapi_db::models::message::Message;
use msgapi_db::repositories::{CategoryRepo, MessageRepo};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::handlers::category_not_found;
use crate::resource::CategoryResource;
use crate::state::AppState;

/// GET /api/categories/
///
/// List all categories, each with its messages.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;

    let mut by_category: HashMap<DbId, Vec<Message>> = HashMap::new();
    for message in MessageRepo::list_grouped_by_category(&state.pool).await? {
        by_category.entry(message.category_id).or_default().push(message);
    }

    let links = state.config.links();
    let body: Vec<_> = categories
        .into_iter()
        .map(|c| {
            let messages = by_category.remove(&c.id).unwrap_or_default();
            CategoryResource::new(c, messages, &links)
        })
        .collect();

    Ok(Json(body))
}

/// POST /api/categories/
pub async fn create_category(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCategoryRequest>,
) -> AppResult<impl IntoResponse> {
    let name = input.into_name()?;
    let category = CategoryRepo::create(&state.pool, &name).await?;

    tracing::info!(category_id = category.id, name = %category.name, "Category created");

    Ok((
        StatusCode::CREATED,
        Json(CategoryResource::new(category, Vec::new(), &state.config.links())),
    ))
}

/// GET /api/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| category_not_found(id))?;
    let messages = MessageRepo::list_by_category(&state.pool, id).await?;

    Ok(Json(CategoryResource::new(
        category,
        messages,
        &state.config.links(),
    )))
}

/// PATCH /api/categories/{id}
///
/// Rename a category.
pub async fn update_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateCategoryRequest>,
) -> AppResult<impl IntoResponse> {
    if CategoryRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(category_not_found(id));
    }
    input.check()?;

    let category = CategoryRepo::update(&state.pool, id, input.name.as_deref())
        .await?
        .ok_or_else(|| category_not_found(id))?;
    let messages = MessageRepo::list_by_category(&state.pool, id).await?;

    tracing::info!(category_id = id, "Category updated");

    Ok(Json(CategoryResource::new(
        category,
        messages,
        &state.config.links(),
    )))
}

/// DELETE /api/categories/{id}
///
/// Deletes the category and, through the foreign key, all its messages.
pub async fn delete_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CategoryRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(category_not_found(id));
    }

    tracing::info!(category_id = id, "Category deleted");

    Ok(StatusCode::NO_CONTENT)
}
