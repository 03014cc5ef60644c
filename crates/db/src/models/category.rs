//! Category model.

use msgapi_core::types::DbId;
use sqlx::FromRow;

/// A row from the `category` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
}
