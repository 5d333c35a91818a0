use crate::domain::category::{Category, CategoryWithProducts};
use crate::forms::categories::{AddCategoryForm, EditCategoryForm};
use crate::repository::{CategoryReader, CategoryWriter};
use crate::services::{MessageResponse, ServiceError, ServiceResult};

/// Lists every category with its products attached.
pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryWithProducts>>
where
    R: CategoryReader + ?Sized,
{
    repo.list_categories().map_err(ServiceError::from)
}

/// Loads a single category with its products attached.
pub fn get_category<R>(repo: &R, category_id: i32) -> ServiceResult<CategoryWithProducts>
where
    R: CategoryReader + ?Sized,
{
    repo.get_category_by_id(category_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Creates a new category.
pub fn create_category<R>(repo: &R, form: AddCategoryForm) -> ServiceResult<Category>
where
    R: CategoryWriter + ?Sized,
{
    let new_category = form
        .into_new_category()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    repo.create_category(&new_category)
        .map_err(ServiceError::from)
}

/// Applies a partial update to an existing category.
pub fn update_category<R>(
    repo: &R,
    category_id: i32,
    form: EditCategoryForm,
) -> ServiceResult<MessageResponse>
where
    R: CategoryWriter + ?Sized,
{
    let updates = form
        .into_update_category()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    repo.update_category(category_id, &updates)
        .map_err(ServiceError::from)?;

    Ok(MessageResponse::new("Category updated successfully"))
}

/// Deletes a category. Products referencing it are detached by the store.
pub fn delete_category<R>(repo: &R, category_id: i32) -> ServiceResult<MessageResponse>
where
    R: CategoryWriter + ?Sized,
{
    repo.delete_category(category_id)
        .map_err(ServiceError::from)?;

    Ok(MessageResponse::new("Category deleted successfully"))
}
