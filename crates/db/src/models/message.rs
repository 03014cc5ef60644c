//! Message model.

use msgapi_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `message` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Message {
    pub id: DbId,
    pub message: String,
    pub duration: i32,
    pub creation_date: Timestamp,
    pub category_id: DbId,
    pub printed_times: i32,
    pub printed_once: bool,
}

/// A `message` row joined with the name of its category.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct MessageWithCategory {
    pub id: DbId,
    pub message: String,
    pub duration: i32,
    pub creation_date: Timestamp,
    pub category_id: DbId,
    pub category_name: String,
    pub printed_times: i32,
    pub printed_once: bool,
}

impl MessageWithCategory {
    /// Drop the joined category name.
    pub fn into_message(self) -> Message {
        Message {
            id: self.id,
            message: self.message,
            duration: self.duration,
            creation_date: self.creation_date,
            category_id: self.category_id,
            printed_times: self.printed_times,
            printed_once: self.printed_once,
        }
    }
}
