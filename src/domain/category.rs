use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Domain representation of a product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique identifier of the category.
    pub id: i32,
    /// Human-readable name of the category.
    pub category_name: String,
}

/// Category together with every product that references it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryWithProducts {
    #[serde(flatten)]
    pub category: Category,
    /// Products whose `category_id` points at this category, ordered by id.
    pub products: Vec<Product>,
}

impl CategoryWithProducts {
    /// Wrap a category with the products attached to it.
    pub fn new(category: Category, products: Vec<Product>) -> Self {
        Self { category, products }
    }
}

/// Payload required to insert a new category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    /// Human-readable name of the category.
    pub category_name: String,
}

impl NewCategory {
    /// Construct a new category payload with a trimmed name.
    pub fn new(category_name: impl Into<String>) -> Self {
        let category_name = category_name.into().trim().to_string();
        Self { category_name }
    }
}

/// Patch data applied when updating an existing category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCategory {
    /// Optional name update.
    pub category_name: Option<String>,
}

impl UpdateCategory {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the category name.
    pub fn category_name(mut self, category_name: impl Into<String>) -> Self {
        self.category_name = Some(category_name.into());
        self
    }

    /// Whether the patch carries no column changes.
    pub fn is_empty(&self) -> bool {
        self.category_name.is_none()
    }
}
