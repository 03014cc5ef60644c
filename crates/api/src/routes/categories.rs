//! Route definitions for categories (`postgres` backend only).

use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Category routes.
///
/// ```text
/// GET    /categories/        -> list_categories
/// POST   /categories/        -> create_category
/// GET    /categories/{id}    -> get_category
/// PATCH  /categories/{id}    -> update_category
/// DELETE /categories/{id}    -> delete_category
/// ```
pub fn router() -> Router<AppState> {
    let collection = get(categories::list_categories).post(categories::create_category);

    Router::new()
        .route("/categories/", collection.clone())
        .route("/categories", collection)
        .route(
            "/categories/{id}",
            get(categories::get_category)
                .patch(categories::update_category)
                .delete(categories::delete_category),
        )
}
