//! Inbound message payloads and their validation rules.
//!
//! Both storage backends accept the same JSON for creation and partial
//! update. Creation payloads are parsed leniently (every field optional, a
//! non-string `message` counts as missing, a numeric string is accepted for
//! `duration`, the category may be a string or a `{"name": ...}` object) so
//! that a missing or malformed field is reported as a per-field validation
//! error instead of a body parse failure.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::category::category_name_error;
use crate::error::{CoreError, FieldErrors};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of the message text in the persisted backend.
pub const MAX_MESSAGE_LENGTH: usize = 250;

pub const MESSAGE_BLANK: &str = "Message cannot be blank!";
pub const DURATION_BLANK: &str = "Duration cannot be blank!";
pub const MESSAGE_CATEGORY_BLANK: &str = "Message category cannot be blank!";

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Body of `POST /api/messages/`.
///
/// `message_category` also accepts the key `category`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateMessageRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(
        required(message = "Message cannot be blank!"),
        custom(function = "not_blank", message = "Message cannot be blank!")
    )]
    pub message: Option<String>,

    #[serde(default, deserialize_with = "lenient_int")]
    #[validate(required(message = "Duration cannot be blank!"))]
    pub duration: Option<i32>,

    #[serde(default, alias = "category", deserialize_with = "category_name")]
    #[validate(
        required(message = "Message category cannot be blank!"),
        custom(function = "not_blank", message = "Message category cannot be blank!")
    )]
    pub message_category: Option<String>,
}

/// A creation payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub message: String,
    pub duration: i32,
    pub category: String,
}

impl NewMessage {
    /// Column bounds of the persisted backend: the message text and the
    /// category the message may create. Both fields are reported together.
    pub fn check_persisted(&self) -> Result<(), CoreError> {
        let mut errors = FieldErrors::new();
        if let Some(error) = message_length_error(&self.message) {
            errors.add("message", error);
        }
        if let Some(error) = category_name_error(&self.category) {
            errors.add("message_category", error);
        }
        errors.into_result()
    }
}

impl CreateMessageRequest {
    /// Validate every field and return the checked values.
    ///
    /// All offending fields are reported together.
    pub fn into_new(self) -> Result<NewMessage, CoreError> {
        self.validate()?;
        match (self.message, self.duration, self.message_category) {
            (Some(message), Some(duration), Some(category)) => Ok(NewMessage {
                message,
                duration,
                category,
            }),
            _ => Err(CoreError::Internal(
                "validated message payload is missing a field".to_string(),
            )),
        }
    }
}

/// Body of `PATCH /api/messages/{id}`. Absent fields are left untouched;
/// unknown fields are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct MessagePatch {
    #[validate(custom(function = "not_blank", message = "Message cannot be blank!"))]
    pub message: Option<String>,
    pub duration: Option<i32>,
    pub printed_times: Option<i32>,
    pub printed_once: Option<bool>,
}

impl MessagePatch {
    pub fn is_empty(&self) -> bool {
        self.message.is_none()
            && self.duration.is_none()
            && self.printed_times.is_none()
            && self.printed_once.is_none()
    }

    pub fn check(&self) -> Result<(), CoreError> {
        Ok(self.validate()?)
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Reject empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank"))
    } else {
        Ok(())
    }
}

/// Enforce the `VARCHAR(250)` bound of the persisted backend.
pub fn validate_message_length(message: &str) -> Result<(), CoreError> {
    let mut errors = FieldErrors::new();
    if let Some(error) = message_length_error(message) {
        errors.add("message", error);
    }
    errors.into_result()
}

fn message_length_error(message: &str) -> Option<String> {
    (message.chars().count() > MAX_MESSAGE_LENGTH)
        .then(|| format!("Longer than maximum length {MAX_MESSAGE_LENGTH}."))
}

// ---------------------------------------------------------------------------
// Lenient field parsers
// ---------------------------------------------------------------------------

/// Accept only a JSON string; any other value becomes `None` and is
/// reported as blank.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        _ => None,
    }))
}

/// Accept a JSON integer or a numeric string. Anything else (including
/// floats and out-of-range values) becomes `None`, which the `required`
/// rule then reports against the field.
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }))
}

/// Accept `"chore"` or `{"name": "chore"}`.
fn category_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Object(map) => map.get("name").and_then(Value::as_str).map(str::to_owned),
        _ => None,
    }))
}
