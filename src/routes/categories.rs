use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::categories::{AddCategoryForm, EditCategoryForm};
use crate::repository::DieselRepository;
use crate::routes::{error_response, run_blocking};
use crate::services::categories;

const ENTITY: &str = "Category";

#[get("/categories")]
pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match run_blocking(move || categories::list_categories(repo.get_ref())).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response(err, ENTITY, "list categories"),
    }
}

#[get("/categories/{category_id}")]
pub async fn show_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let category_id = path.into_inner();

    match run_blocking(move || categories::get_category(repo.get_ref(), category_id)).await {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(err) => error_response(err, ENTITY, &format!("load category {category_id}")),
    }
}

#[post("/categories")]
pub async fn add_category(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddCategoryForm>,
) -> impl Responder {
    let form = form.into_inner();

    match run_blocking(move || categories::create_category(repo.get_ref(), form)).await {
        Ok(category) => HttpResponse::Created().json(category),
        Err(err) => error_response(err, ENTITY, "create category"),
    }
}

#[put("/categories/{category_id}")]
pub async fn edit_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditCategoryForm>,
) -> impl Responder {
    let category_id = path.into_inner();
    let form = form.into_inner();

    match run_blocking(move || categories::update_category(repo.get_ref(), category_id, form))
        .await
    {
        Ok(ack) => HttpResponse::Ok().json(ack),
        Err(err) => error_response(err, ENTITY, &format!("update category {category_id}")),
    }
}

#[delete("/categories/{category_id}")]
pub async fn delete_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let category_id = path.into_inner();

    match run_blocking(move || categories::delete_category(repo.get_ref(), category_id)).await {
        Ok(ack) => HttpResponse::Ok().json(ack),
        Err(err) => error_response(err, ENTITY, &format!("delete category {category_id}")),
    }
}
