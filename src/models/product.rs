use std::str::FromStr;

use diesel::prelude::*;
use rust_decimal::Decimal;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, UpdateProduct as DomainUpdateProduct,
};

#[derive(Debug, Clone, Identifiable, Queryable, Associations, Selectable)]
#[diesel(
    table_name = crate::schema::product,
    belongs_to(super::category::Category, foreign_key = category_id)
)]
pub struct Product {
    pub id: i32,
    pub product_name: String,
    pub price: String,
    pub stock: i32,
    pub category_id: Option<i32>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product)]
pub struct NewProduct<'a> {
    pub product_name: &'a str,
    pub price: String,
    pub stock: i32,
    pub category_id: Option<i32>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::product)]
pub struct UpdateProduct<'a> {
    pub product_name: Option<&'a str>,
    pub price: Option<String>,
    pub stock: Option<i32>,
    pub category_id: Option<Option<i32>>,
}

impl TryFrom<Product> for DomainProduct {
    type Error = rust_decimal::Error;

    fn try_from(value: Product) -> Result<Self, Self::Error> {
        let price = Decimal::from_str(&value.price)?;
        Ok(Self {
            id: value.id,
            product_name: value.product_name,
            price,
            stock: value.stock,
            category_id: value.category_id,
        })
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            product_name: value.product_name.as_str(),
            price: value.price.to_string(),
            stock: value.stock,
            category_id: value.category_id,
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(value: &'a DomainUpdateProduct) -> Self {
        Self {
            product_name: value.product_name.as_deref(),
            price: value.price.map(|price| price.to_string()),
            stock: value.stock,
            category_id: value.category_id,
        }
    }
}
