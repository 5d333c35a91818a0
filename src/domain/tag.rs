use serde::{Deserialize, Serialize};

use crate::domain::product::Product;
use crate::domain::product_tag::ProductTag;

/// Domain representation of a reusable tag that can be attached to multiple products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    /// Unique identifier of the tag.
    pub id: i32,
    /// Optional human-readable name of the tag.
    pub tag_name: Option<String>,
}

/// Product reached from a tag, along with the association row linking them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaggedProduct {
    #[serde(flatten)]
    pub product: Product,
    pub product_tag: ProductTag,
}

/// Tag together with the products it is attached to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagWithProducts {
    #[serde(flatten)]
    pub tag: Tag,
    pub products: Vec<TaggedProduct>,
}

impl TagWithProducts {
    /// Wrap a tag with the products attached to it.
    pub fn new(tag: Tag, products: Vec<TaggedProduct>) -> Self {
        Self { tag, products }
    }
}

/// Payload required to insert a new tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTag {
    pub tag_name: Option<String>,
}

impl NewTag {
    /// Construct a new tag payload with a trimmed name.
    pub fn new(tag_name: Option<impl Into<String>>) -> Self {
        let tag_name = tag_name.map(|name| name.into().trim().to_string());
        Self { tag_name }
    }
}

/// Patch data applied when updating an existing tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTag {
    /// `Some(None)` clears the name, `None` leaves it untouched.
    pub tag_name: Option<Option<String>>,
}

impl UpdateTag {
    /// Create a new patch object with no changes applied yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the tag name, using `None` to clear an existing value.
    pub fn tag_name(mut self, tag_name: Option<impl Into<String>>) -> Self {
        self.tag_name = Some(tag_name.map(|value| value.into()));
        self
    }

    /// Whether the patch carries no column changes.
    pub fn is_empty(&self) -> bool {
        self.tag_name.is_none()
    }
}
