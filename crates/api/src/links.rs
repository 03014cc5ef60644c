//! Canonical links embedded in resource representations.

use msgapi_core::types::DbId;

/// Builds `uri`/`url` values from the configured public base URL.
///
/// With an empty base the links are root-relative (`/api/messages/1`).
#[derive(Debug, Clone, Copy)]
pub struct Links<'a> {
    base: &'a str,
}

impl<'a> Links<'a> {
    pub fn new(base: &'a str) -> Self {
        Self { base }
    }

    /// Link to `GET /api/messages/{id}`.
    pub fn message(&self, id: DbId) -> String {
        format!("{}/api/messages/{id}", self.base)
    }

    /// Link to `GET /api/categories/{id}`.
    pub fn category(&self, id: DbId) -> String {
        format!("{}/api/categories/{id}", self.base)
    }
}
