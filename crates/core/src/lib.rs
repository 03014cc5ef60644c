//! Domain types shared by the storage and HTTP layers.
//!
//! Holds the id/timestamp aliases, the domain error type, inbound request
//! DTOs with their validation rules, and the in-memory message store.

pub mod category;
pub mod error;
pub mod message;
pub mod message_store;
pub mod types;
