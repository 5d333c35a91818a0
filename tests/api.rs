use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use catalog_api::repository::DieselRepository;
use catalog_api::routes;

mod common;

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(DieselRepository::new($test_db.pool())))
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn category_endpoints_round_trip() {
    let test_db = common::TestDb::new("api_category_endpoints_round_trip.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/categories")
        .set_json(json!({ "category_name": "Shirts" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().expect("id");
    assert_eq!(created["category_name"], "Shirts");

    let req = test::TestRequest::get()
        .uri(&format!("/api/categories/{id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["category_name"], "Shirts");
    assert_eq!(body["products"], json!([]));

    let req = test::TestRequest::put()
        .uri(&format!("/api/categories/{id}"))
        .set_json(json!({ "category_name": "Tops" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Category updated successfully");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/categories/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/categories/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Category not found");
}

#[actix_web::test]
async fn product_endpoints_expose_associations() {
    let test_db = common::TestDb::new("api_product_endpoints_expose_associations.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/tags")
        .set_json(json!({ "tag_name": "rock music" }))
        .to_request();
    let tag: Value = test::call_and_read_body_json(&app, req).await;
    let tag_id = tag["id"].as_i64().expect("tag id");

    let req = test::TestRequest::post()
        .uri("/api/products")
        .set_json(json!({
            "product_name": "Vinyl Record",
            "price": "12.50",
            "tagIds": [tag_id]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let product: Value = test::read_body_json(resp).await;
    let product_id = product["id"].as_i64().expect("product id");
    assert_eq!(product["price"], "12.50");
    assert_eq!(product["stock"], 10);

    let req = test::TestRequest::get()
        .uri(&format!("/api/products/{product_id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["category"], Value::Null);
    assert_eq!(body["tags"][0]["tag_name"], "rock music");
    assert_eq!(body["tags"][0]["product_tag"]["product_id"], product_id);

    let req = test::TestRequest::get()
        .uri(&format!("/api/tags/{tag_id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["products"][0]["product_name"], "Vinyl Record");

    let req = test::TestRequest::put()
        .uri(&format!("/api/products/{product_id}"))
        .set_json(json!({ "stock": 4 }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Product updated successfully");
    assert_eq!(body["updated_product"]["stock"], 4);
    assert!(body.get("new_product_tags").is_none());

    let req = test::TestRequest::delete()
        .uri(&format!("/api/products/{product_id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Product deleted successfully");

    let req = test::TestRequest::get().uri("/api/products").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn rejected_payloads_return_bad_request() {
    let test_db = common::TestDb::new("api_rejected_payloads_return_bad_request.db");
    let app = init_app!(test_db);

    let payloads = [
        json!({ "product_name": "Cap", "price": "cheap" }),
        json!({ "product_name": "Cap" }),
        json!({ "product_name": "Cap", "price": 3, "category_id": 404 }),
    ];

    for payload in payloads {
        let req = test::TestRequest::post()
            .uri("/api/products")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["message"].is_string());
    }

    let req = test::TestRequest::get().uri("/api/products").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn missing_rows_return_not_found() {
    let test_db = common::TestDb::new("api_missing_rows_return_not_found.db");
    let app = init_app!(test_db);

    for (method, uri) in [
        ("PUT", "/api/tags/41"),
        ("DELETE", "/api/tags/41"),
        ("PUT", "/api/products/41"),
        ("DELETE", "/api/products/41"),
        ("DELETE", "/api/categories/41"),
    ] {
        let req = match method {
            "PUT" => test::TestRequest::put().set_json(json!({ "tag_name": "x", "stock": 1 })),
            _ => test::TestRequest::delete(),
        }
        .uri(uri)
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{method} {uri}");
    }
}
