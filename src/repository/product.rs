use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::category::Category as DomainCategory,
    domain::product::{
        NewProduct as DomainNewProduct, Product as DomainProduct, ProductDetails, ProductTagLink,
        UpdateProduct as DomainUpdateProduct,
    },
    domain::product_tag::{
        NewProductTag as DomainNewProductTag, ProductTag as DomainProductTag,
        ProductTagReplacement,
    },
    models::category::Category as DbCategory,
    models::product::{
        NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
    },
    models::product_tag::{NewProductTag as DbNewProductTag, ProductTag as DbProductTag},
    models::tag::Tag as DbTag,
    repository::errors::{RepositoryError, RepositoryResult},
    repository::{DieselRepository, ProductReader, ProductWriter},
};

impl ProductReader for DieselRepository {
    fn list_products(&self) -> RepositoryResult<Vec<ProductDetails>> {
        use crate::schema::product;

        let mut conn = self.conn()?;

        let db_products = product::table
            .order(product::id.asc())
            .load::<DbProduct>(&mut conn)?;

        load_associations(&mut conn, db_products)
    }

    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<ProductDetails>> {
        use crate::schema::product;

        let mut conn = self.conn()?;
        let product = product::table
            .find(id)
            .first::<DbProduct>(&mut conn)
            .optional()?;

        match product {
            Some(db_product) => Ok(load_associations(&mut conn, vec![db_product])?.pop()),
            None => Ok(None),
        }
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::product;

        let mut conn = self.conn()?;
        let db_new = DbNewProduct::from(new_product);

        let created = diesel::insert_into(product::table)
            .values(&db_new)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(DomainProduct::try_from(created)?)
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &DomainUpdateProduct,
    ) -> RepositoryResult<DomainProduct> {
        use crate::schema::product;

        let mut conn = self.conn()?;

        if updates.is_empty() {
            let current = product::table
                .find(product_id)
                .first::<DbProduct>(&mut conn)?;
            return Ok(DomainProduct::try_from(current)?);
        }

        let db_updates = DbUpdateProduct::from(updates);

        let updated = diesel::update(product::table.find(product_id))
            .set(&db_updates)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(DomainProduct::try_from(updated)?)
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
        use crate::schema::product;

        let mut conn = self.conn()?;

        // Associations are removed by the store through ON DELETE CASCADE.
        let deleted = diesel::delete(product::table.find(product_id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn replace_product_tags(
        &self,
        product_id: i32,
        tag_ids: &[i32],
    ) -> RepositoryResult<ProductTagReplacement> {
        let mut conn = self.conn()?;
        let edges = DomainNewProductTag::for_product(product_id, tag_ids);

        // Take the write lock up front so concurrent writers wait on busy_timeout.
        conn.immediate_transaction::<ProductTagReplacement, RepositoryError, _>(|conn| {
            swap_product_tags(conn, product_id, &edges)
        })
    }
}

fn swap_product_tags(
    conn: &mut SqliteConnection,
    product_id: i32,
    edges: &[DomainNewProductTag],
) -> RepositoryResult<ProductTagReplacement> {
    use crate::schema::product_tag;

    let removed = product_tag::table
        .filter(product_tag::product_id.eq(product_id))
        .order(product_tag::id.asc())
        .load::<DbProductTag>(conn)?;

    diesel::delete(product_tag::table.filter(product_tag::product_id.eq(product_id)))
        .execute(conn)?;

    if !edges.is_empty() {
        let rows: Vec<DbNewProductTag> = edges.iter().map(DbNewProductTag::from).collect();
        diesel::insert_into(product_tag::table)
            .values(&rows)
            .execute(conn)?;
    }

    // Every association left for the product was inserted above.
    let inserted = product_tag::table
        .filter(product_tag::product_id.eq(product_id))
        .order(product_tag::id.asc())
        .load::<DbProductTag>(conn)?;

    Ok(ProductTagReplacement {
        removed: removed.into_iter().map(DomainProductTag::from).collect(),
        inserted: inserted.into_iter().map(DomainProductTag::from).collect(),
    })
}

fn load_associations(
    conn: &mut SqliteConnection,
    db_products: Vec<DbProduct>,
) -> RepositoryResult<Vec<ProductDetails>> {
    use crate::schema::{category, product_tag, tag};

    if db_products.is_empty() {
        return Ok(Vec::new());
    }

    let mut category_ids: Vec<i32> = db_products
        .iter()
        .filter_map(|product| product.category_id)
        .collect();
    category_ids.sort_unstable();
    category_ids.dedup();

    let category_map: HashMap<i32, DomainCategory> = if category_ids.is_empty() {
        HashMap::new()
    } else {
        category::table
            .filter(category::id.eq_any(category_ids))
            .load::<DbCategory>(conn)?
            .into_iter()
            .map(|category| (category.id, DomainCategory::from(category)))
            .collect()
    };

    let links = DbProductTag::belonging_to(&db_products)
        .inner_join(tag::table)
        .select((DbProductTag::as_select(), DbTag::as_select()))
        .order(product_tag::id.asc())
        .load::<(DbProductTag, DbTag)>(conn)?;
    let grouped = links.grouped_by(&db_products);

    let mut details = Vec::with_capacity(db_products.len());
    for (db_product, links) in db_products.into_iter().zip(grouped) {
        let mut item = ProductDetails::new(DomainProduct::try_from(db_product)?);
        item.category = item
            .product
            .category_id
            .and_then(|id| category_map.get(&id).cloned());
        item.tags = links
            .into_iter()
            .map(|(link, tag)| ProductTagLink {
                tag: tag.into(),
                product_tag: link.into(),
            })
            .collect();
        details.push(item);
    }

    Ok(details)
}
