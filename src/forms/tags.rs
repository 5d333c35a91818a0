use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::tag::{NewTag, UpdateTag};
use crate::forms::{NAME_MAX_LEN_VALIDATOR, deserialize_some, sanitize_inline_text};

/// Result type returned by the tag form helpers.
pub type TagFormResult<T> = Result<T, TagFormError>;

/// Errors that can occur while processing tag payloads.
#[derive(Debug, Error)]
pub enum TagFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Payload accepted by `POST /tags`. Tags may be created without a name.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddTagForm {
    #[validate(length(max = NAME_MAX_LEN_VALIDATOR))]
    pub tag_name: Option<String>,
}

impl AddTagForm {
    /// Validates and sanitizes the payload into a domain `NewTag`.
    pub fn into_new_tag(self) -> TagFormResult<NewTag> {
        self.validate()?;

        Ok(NewTag::new(sanitize_tag_name(self.tag_name)))
    }
}

/// Payload accepted by `PUT /tags/{id}`.
///
/// `tag_name` distinguishes an absent field (left untouched) from an explicit
/// `null` (clears the name).
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditTagForm {
    #[serde(default, deserialize_with = "deserialize_some")]
    #[validate(length(max = NAME_MAX_LEN_VALIDATOR))]
    pub tag_name: Option<Option<String>>,
}

impl EditTagForm {
    /// Validates and sanitizes the payload into a domain `UpdateTag`.
    pub fn into_update_tag(self) -> TagFormResult<UpdateTag> {
        self.validate()?;

        let mut updates = UpdateTag::new();

        if let Some(name) = self.tag_name {
            updates = updates.tag_name(sanitize_tag_name(name));
        }

        Ok(updates)
    }
}

fn sanitize_tag_name(name: Option<String>) -> Option<String> {
    name.map(|value| sanitize_inline_text(&value))
        .filter(|value| !value.is_empty())
}
