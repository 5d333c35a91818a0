use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::{NewCategory, UpdateCategory};
use crate::forms::{NAME_MAX_LEN_VALIDATOR, sanitize_inline_text};

/// Result type returned by the category form helpers.
pub type CategoryFormResult<T> = Result<T, CategoryFormError>;

/// Errors that can occur while processing category payloads.
#[derive(Debug, Error)]
pub enum CategoryFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The payload did not include `category_name`.
    #[error("category_name is required")]
    MissingName,
    /// The provided name is empty after sanitization.
    #[error("category_name cannot be empty")]
    EmptyName,
}

/// Payload accepted by `POST /categories`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddCategoryForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub category_name: Option<String>,
}

impl AddCategoryForm {
    /// Validates and sanitizes the payload into a domain `NewCategory`.
    pub fn into_new_category(self) -> CategoryFormResult<NewCategory> {
        self.validate()?;

        let name = self.category_name.ok_or(CategoryFormError::MissingName)?;
        let sanitized_name = sanitize_inline_text(&name);
        if sanitized_name.is_empty() {
            return Err(CategoryFormError::EmptyName);
        }

        Ok(NewCategory::new(sanitized_name))
    }
}

/// Payload accepted by `PUT /categories/{id}`; every field is optional.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditCategoryForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub category_name: Option<String>,
}

impl EditCategoryForm {
    /// Validates and sanitizes the payload into a domain `UpdateCategory`.
    pub fn into_update_category(self) -> CategoryFormResult<UpdateCategory> {
        self.validate()?;

        let mut updates = UpdateCategory::new();

        if let Some(name) = self.category_name {
            let sanitized_name = sanitize_inline_text(&name);
            if sanitized_name.is_empty() {
                return Err(CategoryFormError::EmptyName);
            }
            updates = updates.category_name(sanitized_name);
        }

        Ok(updates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_category_form_sanitizes_and_converts() {
        let form = AddCategoryForm {
            category_name: Some("  Outdoor \t Gear ".to_string()),
        };

        let new_category = form
            .into_new_category()
            .expect("expected conversion to succeed");

        assert_eq!(new_category.category_name, "Outdoor Gear");
    }

    #[test]
    fn add_category_form_requires_name() {
        let result = AddCategoryForm::default().into_new_category();

        assert!(matches!(result, Err(CategoryFormError::MissingName)));
    }

    #[test]
    fn add_category_form_rejects_blank_name() {
        let form = AddCategoryForm {
            category_name: Some("   ".to_string()),
        };

        assert!(matches!(
            form.into_new_category(),
            Err(CategoryFormError::EmptyName)
        ));
    }

    #[test]
    fn add_category_form_rejects_overlong_name() {
        let form = AddCategoryForm {
            category_name: Some("x".repeat(300)),
        };

        assert!(matches!(
            form.into_new_category(),
            Err(CategoryFormError::Validation(_))
        ));
    }

    #[test]
    fn edit_category_form_without_fields_is_empty_patch() {
        let updates = EditCategoryForm::default()
            .into_update_category()
            .expect("expected conversion to succeed");

        assert!(updates.is_empty());
    }

    #[test]
    fn edit_category_form_builds_update() {
        let form: EditCategoryForm =
            serde_json::from_str(r#"{"category_name": " Shorts ", "id": 99}"#)
                .expect("valid payload");

        let updates = form
            .into_update_category()
            .expect("expected conversion to succeed");

        assert_eq!(updates.category_name.as_deref(), Some("Shorts"));
    }
}
