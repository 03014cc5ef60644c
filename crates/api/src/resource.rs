//! Outbound JSON representations.
//!
//! Responses are bare JSON objects/arrays (no envelope). Every message
//! carries a `uri` pointing at its single-resource endpoint; the persisted
//! backend nests the owning category as `{id, url, name}`.

use msgapi_core::message_store::MessageModel;
use msgapi_core::types::{DbId, Timestamp};
use msgapi_db::models::category::Category;
use msgapi_db::models::message::{Message, MessageWithCategory};
use serde::Serialize;

use crate::links::Links;

/// Fields common to every message representation.
#[derive(Debug, Serialize)]
pub struct MessageFields {
    pub id: DbId,
    pub uri: String,
    pub message: String,
    pub duration: i32,
    pub creation_date: Timestamp,
    pub printed_times: i32,
    pub printed_once: bool,
}

impl MessageFields {
    /// Render a persisted message without its category.
    pub fn from_message(message: Message, links: &Links<'_>) -> Self {
        Self {
            id: message.id,
            uri: links.message(message.id),
            message: message.message,
            duration: message.duration,
            creation_date: message.creation_date,
            printed_times: message.printed_times,
            printed_once: message.printed_once,
        }
    }
}

/// A message from the `memory` backend.
#[derive(Debug, Serialize)]
pub struct MemoryMessageResource {
    #[serde(flatten)]
    pub fields: MessageFields,
    pub message_category: String,
}

impl MemoryMessageResource {
    pub fn new(model: MessageModel, links: &Links<'_>) -> Self {
        Self {
            fields: MessageFields {
                id: model.id,
                uri: links.message(model.id),
                message: model.message,
                duration: model.duration,
                creation_date: model.creation_date,
                printed_times: model.printed_times,
                printed_once: model.printed_once,
            },
            message_category: model.message_category,
        }
    }
}

/// A category as nested inside a message.
#[derive(Debug, Serialize)]
pub struct CategoryRef {
    pub id: DbId,
    pub url: String,
    pub name: String,
}

/// A message from the `postgres` backend.
#[derive(Debug, Serialize)]
pub struct MessageResource {
    #[serde(flatten)]
    pub fields: MessageFields,
    pub category: CategoryRef,
}

impl MessageResource {
    pub fn new(row: MessageWithCategory, links: &Links<'_>) -> Self {
        let category = CategoryRef {
            id: row.category_id,
            url: links.category(row.category_id),
            name: row.category_name.clone(),
        };
        Self {
            fields: MessageFields::from_message(row.into_message(), links),
            category,
        }
    }
}

/// A category with its messages (each rendered without the category).
#[derive(Debug, Serialize)]
pub struct CategoryResource {
    pub id: DbId,
    pub url: String,
    pub name: String,
    pub messages: Vec<MessageFields>,
}

impl CategoryResource {
    pub fn new(category: Category, messages: Vec<Message>, links: &Links<'_>) -> Self {
        Self {
            id: category.id,
            url: links.category(category.id),
            name: category.name,
            messages: messages
                .into_iter()
                .map(|m| MessageFields::from_message(m, links))
                .collect(),
        }
    }
}
