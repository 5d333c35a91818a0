use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::products::{AddProductForm, EditProductForm};
use crate::repository::DieselRepository;
use crate::routes::{error_response, run_blocking};
use crate::services::products;

const ENTITY: &str = "Product";

#[get("/products")]
pub async fn list_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match run_blocking(move || products::list_products(repo.get_ref())).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response(err, ENTITY, "list products"),
    }
}

#[get("/products/{product_id}")]
pub async fn show_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = path.into_inner();

    match run_blocking(move || products::get_product(repo.get_ref(), product_id)).await {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err, ENTITY, &format!("load product {product_id}")),
    }
}

#[post("/products")]
pub async fn add_product(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddProductForm>,
) -> impl Responder {
    let form = form.into_inner();

    match run_blocking(move || products::create_product(repo.get_ref(), form)).await {
        Ok(product) => HttpResponse::Created().json(product),
        Err(err) => error_response(err, ENTITY, "create product"),
    }
}

#[put("/products/{product_id}")]
pub async fn edit_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditProductForm>,
) -> impl Responder {
    let product_id = path.into_inner();
    let form = form.into_inner();

    match run_blocking(move || products::update_product(repo.get_ref(), product_id, form)).await {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(err) => error_response(err, ENTITY, &format!("update product {product_id}")),
    }
}

#[delete("/products/{product_id}")]
pub async fn delete_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let product_id = path.into_inner();

    match run_blocking(move || products::delete_product(repo.get_ref(), product_id)).await {
        Ok(ack) => HttpResponse::Ok().json(ack),
        Err(err) => error_response(err, ENTITY, &format!("delete product {product_id}")),
    }
}
