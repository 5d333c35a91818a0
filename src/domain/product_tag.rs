use serde::{Deserialize, Serialize};

/// Domain representation linking a product to a tag record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ProductTag {
    /// Unique identifier of the product-tag association.
    pub id: i32,
    /// Identifier of the product the tag is attached to.
    pub product_id: i32,
    /// Identifier of the referenced tag record.
    pub tag_id: i32,
}

/// Payload required to associate an existing tag with a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NewProductTag {
    /// Identifier of the product receiving the tag.
    pub product_id: i32,
    /// Identifier of the tag being attached to the product.
    pub tag_id: i32,
}

impl NewProductTag {
    /// Construct a new association payload between a product and a tag.
    pub fn new(product_id: i32, tag_id: i32) -> Self {
        Self { product_id, tag_id }
    }

    /// Build one association per tag id for `product_id`, skipping repeated ids.
    pub fn for_product(product_id: i32, tag_ids: &[i32]) -> Vec<Self> {
        let mut edges: Vec<Self> = Vec::with_capacity(tag_ids.len());
        for &tag_id in tag_ids {
            if edges.iter().any(|edge| edge.tag_id == tag_id) {
                continue;
            }
            edges.push(Self::new(product_id, tag_id));
        }
        edges
    }
}

/// Outcome of swapping a product's tag associations for a new set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductTagReplacement {
    /// Associations that existed before the replacement and were deleted.
    pub removed: Vec<ProductTag>,
    /// Associations inserted by the replacement.
    pub inserted: Vec<ProductTag>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_product_pairs_every_tag_with_product() {
        let edges = NewProductTag::for_product(7, &[1, 2, 3]);

        assert_eq!(
            edges,
            vec![
                NewProductTag::new(7, 1),
                NewProductTag::new(7, 2),
                NewProductTag::new(7, 3),
            ]
        );
    }

    #[test]
    fn for_product_collapses_repeated_tag_ids() {
        let edges = NewProductTag::for_product(4, &[5, 2, 5, 2, 9]);

        let tag_ids: Vec<i32> = edges.iter().map(|edge| edge.tag_id).collect();
        assert_eq!(tag_ids, vec![5, 2, 9]);
        assert!(edges.iter().all(|edge| edge.product_id == 4));
    }
}
