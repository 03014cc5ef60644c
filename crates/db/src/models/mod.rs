//! Row models for the persisted backend.
//!
//! Each submodule contains `FromRow` structs matching the database rows.
//! Inbound DTOs live in `msgapi_core` so both backends share them.

pub mod category;
pub mod message;
