use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::category::{
    Category as DomainCategory, CategoryWithProducts, NewCategory as DomainNewCategory,
    UpdateCategory as DomainUpdateCategory,
};
use crate::domain::product::Product as DomainProduct;
use crate::models::category::{
    Category as DbCategory, NewCategory as DbNewCategory, UpdateCategory as DbUpdateCategory,
};
use crate::models::product::Product as DbProduct;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<CategoryWithProducts>> {
        use crate::schema::category;

        let mut conn = self.conn()?;

        let categories = category::table
            .order(category::id.asc())
            .load::<DbCategory>(&mut conn)?;

        attach_products(&mut conn, categories)
    }

    fn get_category_by_id(&self, id: i32) -> RepositoryResult<Option<CategoryWithProducts>> {
        use crate::schema::category;

        let mut conn = self.conn()?;

        let category = category::table
            .find(id)
            .first::<DbCategory>(&mut conn)
            .optional()?;

        match category {
            Some(category) => Ok(attach_products(&mut conn, vec![category])?.pop()),
            None => Ok(None),
        }
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(
        &self,
        new_category: &DomainNewCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::category;

        let mut conn = self.conn()?;
        let insertable = DbNewCategory::from(new_category);

        let created = diesel::insert_into(category::table)
            .values(&insertable)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(created.into())
    }

    fn update_category(
        &self,
        category_id: i32,
        updates: &DomainUpdateCategory,
    ) -> RepositoryResult<DomainCategory> {
        use crate::schema::category;

        let mut conn = self.conn()?;

        // An empty changeset is rejected by diesel; resolve the row instead.
        if updates.is_empty() {
            let current = category::table
                .find(category_id)
                .first::<DbCategory>(&mut conn)?;
            return Ok(current.into());
        }

        let db_updates = DbUpdateCategory::from(updates);

        let updated = diesel::update(category::table.find(category_id))
            .set(&db_updates)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_category(&self, category_id: i32) -> RepositoryResult<()> {
        use crate::schema::category;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(category::table.find(category_id)).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

fn attach_products(
    conn: &mut SqliteConnection,
    categories: Vec<DbCategory>,
) -> RepositoryResult<Vec<CategoryWithProducts>> {
    use crate::schema::product;

    if categories.is_empty() {
        return Ok(Vec::new());
    }

    let products = DbProduct::belonging_to(&categories)
        .order(product::id.asc())
        .load::<DbProduct>(conn)?;
    let grouped = products.grouped_by(&categories);

    let mut result = Vec::with_capacity(categories.len());
    for (category, products) in categories.into_iter().zip(grouped) {
        let products = products
            .into_iter()
            .map(DomainProduct::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        result.push(CategoryWithProducts::new(category.into(), products));
    }

    Ok(result)
}
