//! In-memory message store used by the `memory` backend.
//!
//! Ids come from a counter owned by the store: it only ever increases, so an
//! id is never handed out twice even after the message holding it is deleted.
//! The counter and the map sit behind one lock, so concurrent creates cannot
//! observe or assign the same id.

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use crate::message::{MessagePatch, NewMessage};
use crate::types::{DbId, Timestamp};

/// A message held by [`MessageManager`]. The category is a free-form string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageModel {
    pub id: DbId,
    pub message: String,
    pub duration: i32,
    pub creation_date: Timestamp,
    pub message_category: String,
    pub printed_times: i32,
    pub printed_once: bool,
}

impl MessageModel {
    /// Apply the fields present in `patch`. `id`, `creation_date` and
    /// `message_category` are never touched.
    pub fn apply(&mut self, patch: &MessagePatch) {
        if let Some(message) = &patch.message {
            self.message = message.clone();
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(printed_times) = patch.printed_times {
            self.printed_times = printed_times;
        }
        if let Some(printed_once) = patch.printed_once {
            self.printed_once = printed_once;
        }
    }
}

#[derive(Default)]
struct Inner {
    last_id: DbId,
    // Ids are assigned in increasing order, so key order is insertion order.
    messages: BTreeMap<DbId, MessageModel>,
}

/// Owns every message of the `memory` backend.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared through application state.
#[derive(Default)]
pub struct MessageManager {
    inner: RwLock<Inner>,
}

impl MessageManager {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new message, assigning the next id and stamping the creation
    /// time. Returns the stored record.
    pub async fn insert(&self, new: NewMessage) -> MessageModel {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let model = MessageModel {
            id: inner.last_id,
            message: new.message,
            duration: new.duration,
            creation_date: chrono::Utc::now(),
            message_category: new.category,
            printed_times: 0,
            printed_once: false,
        };
        inner.messages.insert(model.id, model.clone());
        model
    }

    /// Look up a message by id.
    pub async fn get(&self, id: DbId) -> Option<MessageModel> {
        self.inner.read().await.messages.get(&id).cloned()
    }

    /// All messages in insertion order.
    pub async fn list(&self) -> Vec<MessageModel> {
        self.inner.read().await.messages.values().cloned().collect()
    }

    /// Apply a partial update. Returns the updated record, or `None` if the
    /// id does not exist.
    pub async fn update(&self, id: DbId, patch: &MessagePatch) -> Option<MessageModel> {
        let mut inner = self.inner.write().await;
        let model = inner.messages.get_mut(&id)?;
        model.apply(patch);
        Some(model.clone())
    }

    /// Remove a message. Returns `true` if it existed.
    pub async fn delete(&self, id: DbId) -> bool {
        self.inner.write().await.messages.remove(&id).is_some()
    }

    /// Number of stored messages.
    pub async fn len(&self) -> usize {
        self.inner.read().await.messages.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
