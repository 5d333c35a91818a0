use diesel::prelude::*;

use crate::domain::category::{
    Category as DomainCategory, NewCategory as DomainNewCategory,
    UpdateCategory as DomainUpdateCategory,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::category)]
pub struct Category {
    pub id: i32,
    pub category_name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::category)]
pub struct NewCategory<'a> {
    pub category_name: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::category)]
pub struct UpdateCategory<'a> {
    pub category_name: Option<&'a str>,
}

impl From<Category> for DomainCategory {
    fn from(value: Category) -> Self {
        Self {
            id: value.id,
            category_name: value.category_name,
        }
    }
}

impl<'a> From<&'a DomainNewCategory> for NewCategory<'a> {
    fn from(value: &'a DomainNewCategory) -> Self {
        Self {
            category_name: value.category_name.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateCategory> for UpdateCategory<'a> {
    fn from(value: &'a DomainUpdateCategory) -> Self {
        Self {
            category_name: value.category_name.as_deref(),
        }
    }
}
