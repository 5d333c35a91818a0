use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::product::Product as DomainProduct;
use crate::domain::tag::{
    NewTag as DomainNewTag, Tag as DomainTag, TagWithProducts, TaggedProduct,
    UpdateTag as DomainUpdateTag,
};
use crate::models::product::Product as DbProduct;
use crate::models::product_tag::ProductTag as DbProductTag;
use crate::models::tag::{NewTag as DbNewTag, Tag as DbTag, UpdateTag as DbUpdateTag};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, TagReader, TagWriter};

impl TagReader for DieselRepository {
    fn list_tags(&self) -> RepositoryResult<Vec<TagWithProducts>> {
        use crate::schema::tag;

        let mut conn = self.conn()?;

        let tags = tag::table.order(tag::id.asc()).load::<DbTag>(&mut conn)?;

        attach_products(&mut conn, tags)
    }

    fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<TagWithProducts>> {
        use crate::schema::tag;

        let mut conn = self.conn()?;

        let tag = tag::table.find(id).first::<DbTag>(&mut conn).optional()?;

        match tag {
            Some(tag) => Ok(attach_products(&mut conn, vec![tag])?.pop()),
            None => Ok(None),
        }
    }
}

impl TagWriter for DieselRepository {
    fn create_tag(&self, new_tag: &DomainNewTag) -> RepositoryResult<DomainTag> {
        use crate::schema::tag;

        let mut conn = self.conn()?;
        let insertable = DbNewTag::from(new_tag);

        let created = diesel::insert_into(tag::table)
            .values(&insertable)
            .get_result::<DbTag>(&mut conn)?;

        Ok(created.into())
    }

    fn update_tag(&self, tag_id: i32, updates: &DomainUpdateTag) -> RepositoryResult<DomainTag> {
        use crate::schema::tag;

        let mut conn = self.conn()?;

        if updates.is_empty() {
            let current = tag::table.find(tag_id).first::<DbTag>(&mut conn)?;
            return Ok(current.into());
        }

        let db_updates = DbUpdateTag::from(updates);

        let updated = diesel::update(tag::table.find(tag_id))
            .set(&db_updates)
            .get_result::<DbTag>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_tag(&self, tag_id: i32) -> RepositoryResult<()> {
        use crate::schema::tag;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(tag::table.find(tag_id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

fn attach_products(
    conn: &mut SqliteConnection,
    tags: Vec<DbTag>,
) -> RepositoryResult<Vec<TagWithProducts>> {
    use crate::schema::{product, product_tag};

    if tags.is_empty() {
        return Ok(Vec::new());
    }

    let links = DbProductTag::belonging_to(&tags)
        .inner_join(product::table)
        .select((DbProductTag::as_select(), DbProduct::as_select()))
        .order(product_tag::id.asc())
        .load::<(DbProductTag, DbProduct)>(conn)?;
    let grouped = links.grouped_by(&tags);

    let mut result = Vec::with_capacity(tags.len());
    for (tag, links) in tags.into_iter().zip(grouped) {
        let mut products = Vec::with_capacity(links.len());
        for (link, product) in links {
            products.push(TaggedProduct {
                product: DomainProduct::try_from(product)?,
                product_tag: link.into(),
            });
        }
        result.push(TagWithProducts::new(tag.into(), products));
    }

    Ok(result)
}
