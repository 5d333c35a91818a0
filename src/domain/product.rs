use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::product_tag::ProductTag;
use crate::domain::tag::Tag;

/// Stock assigned to a product when the payload does not specify one.
pub const DEFAULT_STOCK: i32 = 10;

/// Domain representation of a catalog product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub product_name: String,
    /// Unit price, kept at the scale it was supplied with.
    pub price: Decimal,
    /// Units in stock.
    pub stock: i32,
    /// Optional identifier of the category the product belongs to.
    pub category_id: Option<i32>,
}

/// Tag reached from a product, along with the association row linking them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductTagLink {
    #[serde(flatten)]
    pub tag: Tag,
    pub product_tag: ProductTag,
}

/// Product with its category and tags eagerly attached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductDetails {
    #[serde(flatten)]
    pub product: Product,
    pub category: Option<Category>,
    pub tags: Vec<ProductTagLink>,
}

impl ProductDetails {
    /// Wrap a product without any associations loaded yet.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            category: None,
            tags: Vec::new(),
        }
    }

    /// Identifiers of the tags attached to the product.
    pub fn tag_ids(&self) -> Vec<i32> {
        self.tags.iter().map(|link| link.tag.id).collect()
    }
}

/// Payload required to insert a new product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    /// Human-readable name of the product.
    pub product_name: String,
    /// Unit price.
    pub price: Decimal,
    /// Units in stock.
    pub stock: i32,
    /// Optional identifier of the owning category.
    pub category_id: Option<i32>,
}

impl NewProduct {
    /// Build a new product payload with the default stock and no category.
    pub fn new(product_name: impl Into<String>, price: Decimal) -> Self {
        Self {
            product_name: product_name.into(),
            price,
            stock: DEFAULT_STOCK,
            category_id: None,
        }
    }

    /// Override the stock level.
    pub fn with_stock(mut self, stock: i32) -> Self {
        self.stock = stock;
        self
    }

    /// Attach the product to a category.
    pub fn with_category_id(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

/// Patch data applied when updating an existing product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateProduct {
    /// Optional name update.
    pub product_name: Option<String>,
    /// Optional price update.
    pub price: Option<Decimal>,
    /// Optional stock update.
    pub stock: Option<i32>,
    /// Optional category update; `Some(None)` detaches the product.
    pub category_id: Option<Option<i32>>,
}

impl UpdateProduct {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the product name.
    pub fn product_name(mut self, product_name: impl Into<String>) -> Self {
        self.product_name = Some(product_name.into());
        self
    }

    /// Update the product price.
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Update the stock level.
    pub fn stock(mut self, stock: i32) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Move the product to another category, using `None` to detach it.
    pub fn category_id(mut self, category_id: Option<i32>) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Whether the patch carries no column changes.
    pub fn is_empty(&self) -> bool {
        self.product_name.is_none()
            && self.price.is_none()
            && self.stock.is_none()
            && self.category_id.is_none()
    }
}
