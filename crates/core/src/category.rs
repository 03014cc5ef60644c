//! Category payloads and name validation (persisted backend only).

use serde::Deserialize;

use crate::error::{CoreError, FieldErrors};

/// Minimum length of a category name in characters.
pub const MIN_CATEGORY_NAME_LENGTH: usize = 3;

/// Maximum length of a category name (matches the `VARCHAR(150)` column).
pub const MAX_CATEGORY_NAME_LENGTH: usize = 150;

pub const CATEGORY_NAME_BLANK: &str = "Category name cannot be blank!";

/// Body of `POST /api/categories/`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
}

/// Body of `PATCH /api/categories/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
}

impl CreateCategoryRequest {
    /// Validate and return the checked name.
    pub fn into_name(self) -> Result<String, CoreError> {
        match self.name {
            Some(name) => {
                validate_category_name(&name)?;
                Ok(name)
            }
            None => {
                let mut errors = FieldErrors::new();
                errors.add("name", CATEGORY_NAME_BLANK);
                Err(CoreError::Validation(errors))
            }
        }
    }
}

impl UpdateCategoryRequest {
    pub fn check(&self) -> Result<(), CoreError> {
        match &self.name {
            Some(name) => validate_category_name(name),
            None => Ok(()),
        }
    }
}

/// A category name must be non-blank and between 3 and 150 characters.
pub fn validate_category_name(name: &str) -> Result<(), CoreError> {
    let mut errors = FieldErrors::new();
    if let Some(message) = category_name_error(name) {
        errors.add("name", message);
    }
    errors.into_result()
}

/// The first rule `name` breaks, if any. Lets callers report it under
/// their own field key.
pub fn category_name_error(name: &str) -> Option<String> {
    let len = name.chars().count();

    if name.trim().is_empty() {
        Some(CATEGORY_NAME_BLANK.to_string())
    } else if len < MIN_CATEGORY_NAME_LENGTH {
        Some(format!("Shorter than minimum length {MIN_CATEGORY_NAME_LENGTH}."))
    } else if len > MAX_CATEGORY_NAME_LENGTH {
        Some(format!("Longer than maximum length {MAX_CATEGORY_NAME_LENGTH}."))
    } else {
        None
    }
}
