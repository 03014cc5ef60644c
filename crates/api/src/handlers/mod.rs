//! Request handlers.
//!
//! Each submodule provides async handler functions (list, create, get,
//! update, delete) for one resource. Handlers delegate to the store for
//! their backend and map errors via [`AppError`](crate::error::AppError).

pub mod categories;
pub mod memory_messages;
pub mod messages;

use msgapi_core::error::CoreError;
use msgapi_core::types::DbId;

use crate::error::AppError;

pub(crate) fn message_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Message",
        id,
    })
}

pub(crate) fn category_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    })
}
