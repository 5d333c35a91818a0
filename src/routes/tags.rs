use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::tags::{AddTagForm, EditTagForm};
use crate::repository::DieselRepository;
use crate::routes::{error_response, run_blocking};
use crate::services::tags;

const ENTITY: &str = "Tag";

#[get("/tags")]
pub async fn list_tags(repo: web::Data<DieselRepository>) -> impl Responder {
    match run_blocking(move || tags::list_tags(repo.get_ref())).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response(err, ENTITY, "list tags"),
    }
}

#[get("/tags/{tag_id}")]
pub async fn show_tag(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    let tag_id = path.into_inner();

    match run_blocking(move || tags::get_tag(repo.get_ref(), tag_id)).await {
        Ok(tag) => HttpResponse::Ok().json(tag),
        Err(err) => error_response(err, ENTITY, &format!("load tag {tag_id}")),
    }
}

#[post("/tags")]
pub async fn add_tag(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddTagForm>,
) -> impl Responder {
    let form = form.into_inner();

    match run_blocking(move || tags::create_tag(repo.get_ref(), form)).await {
        Ok(tag) => HttpResponse::Created().json(tag),
        Err(err) => error_response(err, ENTITY, "create tag"),
    }
}

#[put("/tags/{tag_id}")]
pub async fn edit_tag(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditTagForm>,
) -> impl Responder {
    let tag_id = path.into_inner();
    let form = form.into_inner();

    match run_blocking(move || tags::update_tag(repo.get_ref(), tag_id, form)).await {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(err) => error_response(err, ENTITY, &format!("update tag {tag_id}")),
    }
}

#[delete("/tags/{tag_id}")]
pub async fn delete_tag(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    let tag_id = path.into_inner();

    match run_blocking(move || tags::delete_tag(repo.get_ref(), tag_id)).await {
        Ok(ack) => HttpResponse::Ok().json(ack),
        Err(err) => error_response(err, ENTITY, &format!("delete tag {tag_id}")),
    }
}
