use serde::Serialize;

use crate::domain::product::{Product, ProductDetails};
use crate::domain::product_tag::ProductTag;
use crate::forms::products::{AddProductForm, EditProductForm};
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{MessageResponse, ServiceError, ServiceResult};

/// Response body returned after a product update.
///
/// The association lists are present only when the request carried a
/// non-empty `tagIds` list and the tag set was replaced.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProductUpdateOutcome {
    pub message: String,
    pub updated_product: Product,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed_product_tags: Option<Vec<ProductTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_product_tags: Option<Vec<ProductTag>>,
}

/// Lists every product with its category and tags attached.
pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<ProductDetails>>
where
    R: ProductReader + ?Sized,
{
    repo.list_products().map_err(ServiceError::from)
}

/// Loads a single product with its category and tags attached.
pub fn get_product<R>(repo: &R, product_id: i32) -> ServiceResult<ProductDetails>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Creates a product and attaches the supplied tags to it.
///
/// When the tags cannot be attached the product is deleted again so the
/// failed request leaves nothing behind.
pub fn create_product<R>(repo: &R, form: AddProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let payload = form
        .into_new_product()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    let created = repo
        .create_product(&payload.product)
        .map_err(ServiceError::from)?;

    if payload.tag_ids.is_empty() {
        return Ok(created);
    }

    if let Err(err) = repo.replace_product_tags(created.id, &payload.tag_ids) {
        log::error!("Failed to attach tags to product {}: {err}", created.id);
        if let Err(delete_err) = repo.delete_product(created.id) {
            log::error!(
                "Failed to roll back product {} after tag error: {delete_err}",
                created.id
            );
        }
        return Err(ServiceError::from(err));
    }

    Ok(created)
}

/// Applies a partial update to a product and, when a non-empty `tagIds`
/// list is supplied, replaces its whole tag set with that list.
///
/// The tag set is only touched after the product row was found and updated.
pub fn update_product<R>(
    repo: &R,
    product_id: i32,
    form: EditProductForm,
) -> ServiceResult<ProductUpdateOutcome>
where
    R: ProductWriter + ?Sized,
{
    let patch = form
        .into_update_product()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    let updated_product = repo
        .update_product(product_id, &patch.updates)
        .map_err(ServiceError::from)?;

    let tag_ids = match patch.tag_ids {
        Some(tag_ids) if !tag_ids.is_empty() => tag_ids,
        _ => {
            return Ok(ProductUpdateOutcome {
                message: "Product updated successfully".to_string(),
                updated_product,
                removed_product_tags: None,
                new_product_tags: None,
            });
        }
    };

    let replacement = repo
        .replace_product_tags(product_id, &tag_ids)
        .map_err(ServiceError::from)?;

    log::debug!(
        "Replaced tags of product {product_id}: {} removed, {} inserted",
        replacement.removed.len(),
        replacement.inserted.len()
    );

    Ok(ProductUpdateOutcome {
        message: "Product and tags updated successfully".to_string(),
        updated_product,
        removed_product_tags: Some(replacement.removed),
        new_product_tags: Some(replacement.inserted),
    })
}

/// Deletes a product. Its tag associations are removed by the store.
pub fn delete_product<R>(repo: &R, product_id: i32) -> ServiceResult<MessageResponse>
where
    R: ProductWriter + ?Sized,
{
    repo.delete_product(product_id)
        .map_err(ServiceError::from)?;

    Ok(MessageResponse::new("Product deleted successfully"))
}
