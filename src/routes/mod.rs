use actix_web::{HttpResponse, error, web};

use crate::services::{MessageResponse, ServiceError, ServiceResult};

pub mod categories;
pub mod products;
pub mod tags;

/// Register the catalog endpoints under `/api` along with the JSON extractor settings.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api")
            .service(categories::list_categories)
            .service(categories::show_category)
            .service(categories::add_category)
            .service(categories::edit_category)
            .service(categories::delete_category)
            .service(tags::list_tags)
            .service(tags::show_tag)
            .service(tags::add_tag)
            .service(tags::edit_tag)
            .service(tags::delete_tag)
            .service(products::list_products)
            .service(products::show_product)
            .service(products::add_product)
            .service(products::edit_product)
            .service(products::delete_product),
    );
}

/// Malformed or wrongly typed JSON bodies become `400` with a message body.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(MessageResponse::new(err.to_string()));
        error::InternalError::from_response(err, response).into()
    })
}

/// Run a blocking service call on the actix blocking pool.
pub(crate) async fn run_blocking<T, F>(operation: F) -> ServiceResult<T>
where
    F: FnOnce() -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    web::block(operation)
        .await
        .unwrap_or_else(|err| Err(ServiceError::Internal(err.to_string())))
}

/// Translate a service error into its HTTP response.
pub(crate) fn error_response(err: ServiceError, entity: &str, action: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(MessageResponse::new(format!("{entity} not found")))
        }
        ServiceError::Validation(message) => {
            log::warn!("Rejected request to {action}: {message}");
            HttpResponse::BadRequest().json(MessageResponse::new(message))
        }
        ServiceError::Internal(message) => {
            log::error!("Failed to {action}: {message}");
            HttpResponse::InternalServerError().json(MessageResponse::new(message))
        }
    }
}
