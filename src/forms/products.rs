use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::forms::{NAME_MAX_LEN_VALIDATOR, deserialize_some, sanitize_inline_text};

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product payloads.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The payload did not include `product_name`.
    #[error("product_name is required")]
    MissingName,
    /// The provided name is empty after sanitization.
    #[error("product_name cannot be empty")]
    EmptyName,
    /// The payload did not include `price`.
    #[error("price is required")]
    MissingPrice,
}

/// Payload accepted by `POST /products`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddProductForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub product_name: Option<String>,
    /// Accepts JSON numbers as well as decimal strings such as `"12.50"`.
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    pub category_id: Option<i32>,
    /// Tags to attach to the new product.
    #[serde(default, rename = "tagIds", alias = "tag_ids")]
    pub tag_ids: Option<Vec<i32>>,
}

/// Validated product payload along with the tags to attach after insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProductWithTags {
    pub product: NewProduct,
    pub tag_ids: Vec<i32>,
}

impl AddProductForm {
    /// Validates and sanitizes the payload into a domain `NewProduct`.
    pub fn into_new_product(self) -> ProductFormResult<NewProductWithTags> {
        self.validate()?;

        let name = self.product_name.ok_or(ProductFormError::MissingName)?;
        let sanitized_name = sanitize_inline_text(&name);
        if sanitized_name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        let price = self.price.ok_or(ProductFormError::MissingPrice)?;

        let mut product = NewProduct::new(sanitized_name, price);

        if let Some(stock) = self.stock {
            product = product.with_stock(stock);
        }

        if let Some(category_id) = self.category_id {
            product = product.with_category_id(category_id);
        }

        Ok(NewProductWithTags {
            product,
            tag_ids: self.tag_ids.unwrap_or_default(),
        })
    }
}

/// Payload accepted by `PUT /products/{id}`; every field is optional.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditProductForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub product_name: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i32>,
    /// `null` detaches the product from its category.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub category_id: Option<Option<i32>>,
    /// Replacement tag set. Absent or empty leaves the current tags in place.
    #[serde(default, rename = "tagIds", alias = "tag_ids")]
    pub tag_ids: Option<Vec<i32>>,
}

/// Validated product patch along with the optional replacement tag set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPatch {
    pub updates: UpdateProduct,
    pub tag_ids: Option<Vec<i32>>,
}

impl EditProductForm {
    /// Validates and sanitizes the payload into a domain `UpdateProduct`.
    pub fn into_update_product(self) -> ProductFormResult<ProductPatch> {
        self.validate()?;

        let mut updates = UpdateProduct::new();

        if let Some(name) = self.product_name {
            let sanitized = sanitize_inline_text(&name);
            if sanitized.is_empty() {
                return Err(ProductFormError::EmptyName);
            }
            updates = updates.product_name(sanitized);
        }

        if let Some(price) = self.price {
            updates = updates.price(price);
        }

        if let Some(stock) = self.stock {
            updates = updates.stock(stock);
        }

        if let Some(category_id) = self.category_id {
            updates = updates.category_id(category_id);
        }

        Ok(ProductPatch {
            updates,
            tag_ids: self.tag_ids,
        })
    }
}
