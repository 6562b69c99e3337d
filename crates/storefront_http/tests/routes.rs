use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use storefront_core::{
    InMemoryCustomerRepository, InMemoryEmployeeRepository, InMemoryProductRepository, Validator,
};
use storefront_http::{create_router, AppState};
use tower::ServiceExt;

struct TestApp {
    router: Router,
    employees: Arc<InMemoryEmployeeRepository>,
    products: Arc<InMemoryProductRepository>,
    customers: Arc<InMemoryCustomerRepository>,
}

fn test_app() -> TestApp {
    let employees = Arc::new(InMemoryEmployeeRepository::new());
    let products = Arc::new(InMemoryProductRepository::new());
    let customers = Arc::new(InMemoryCustomerRepository::new());
    let state = AppState::new(
        Box::new(Arc::clone(&employees)),
        Box::new(Arc::clone(&products)),
        Box::new(Arc::clone(&customers)),
        Validator::default(),
    );
    TestApp {
        router: create_router(state),
        employees,
        products,
        customers,
    }
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn create_employee_returns_created_envelope() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        "POST",
        "/api/employees/",
        Some(json!({"name": "John Doe", "role": "Engineer"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "code": 201,
            "status": "Created",
            "data": {
                "employee_id": "1",
                "name": "John Doe",
                "role": "Engineer",
                "email": "",
                "phone": "",
                "date_hired": ""
            }
        })
    );
    assert_eq!(app.employees.len(), 1);
}

#[tokio::test]
async fn collection_path_works_with_and_without_trailing_slash() {
    let app = test_app();
    send(
        &app.router,
        "POST",
        "/api/customers",
        Some(json!({"name": "Ada", "loyalty_pts": 10})),
    )
    .await;

    let (status, with_slash) = send(&app.router, "GET", "/api/customers/", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, without_slash) = send(&app.router, "GET", "/api/customers", None).await;
    assert_eq!(with_slash, without_slash);
    assert_eq!(with_slash["data"][0]["customer_id"], json!(1));
}

#[tokio::test]
async fn missing_product_is_not_found() {
    let app = test_app();

    let (status, body) = send(&app.router, "GET", "/api/products/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
    assert_eq!(body["status"], "Not Found");
    assert_eq!(body["data"], "product not found: 999");
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/products/")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "Bad Request");
    assert!(!body["data"].as_str().unwrap().is_empty());
    assert_eq!(app.products.save_calls(), 0);
}

#[tokio::test]
async fn wrong_field_type_is_bad_request() {
    let app = test_app();

    let (status, _) = send(
        &app.router,
        "POST",
        "/api/products/",
        Some(json!({"name": "Lamp", "price": "cheap"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.products.save_calls(), 0);
}

#[tokio::test]
async fn validation_failure_is_bad_request_and_skips_store() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        "POST",
        "/api/employees/",
        Some(json!({"role": "Engineer", "email": "not-an-email"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["data"].as_str().unwrap();
    assert!(message.contains("name"));
    assert!(message.contains("email"));
    assert_eq!(app.employees.save_calls(), 0);
}

#[tokio::test]
async fn store_failure_is_internal_server_error() {
    let app = test_app();
    app.customers.fail_with("database is locked");

    let (status, body) = send(
        &app.router,
        "POST",
        "/api/customers/",
        Some(json!({"name": "Ada"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "Internal Server Error");
    assert_eq!(body["data"], "database is locked");
}

#[tokio::test]
async fn update_uses_path_id_over_body_id() {
    let app = test_app();
    send(
        &app.router,
        "POST",
        "/api/products/",
        Some(json!({"name": "Lamp", "price": 10.5, "stock_qty": 3})),
    )
    .await;

    let (status, body) = send(
        &app.router,
        "PUT",
        "/api/products/1",
        Some(json!({"product_id": "42", "name": "Desk lamp", "price": 12.0, "stock_qty": 2})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["data"]["product_id"], "1");
    assert_eq!(body["data"]["name"], "Desk lamp");

    let (_, fetched) = send(&app.router, "GET", "/api/products/1", None).await;
    assert_eq!(fetched["data"], body["data"]);
}

#[tokio::test]
async fn update_of_missing_record_is_not_found() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        "PUT",
        "/api/employees/7",
        Some(json!({"name": "Jane", "role": "Manager"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"], "employee not found: 7");
}

#[tokio::test]
async fn delete_returns_status_without_data() {
    let app = test_app();
    send(
        &app.router,
        "POST",
        "/api/employees/",
        Some(json!({"name": "John Doe", "role": "Engineer"})),
    )
    .await;

    let (status, body) = send(&app.router, "DELETE", "/api/employees/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"code": 200, "status": "Deleted Successfully"}));
    assert!(app.employees.is_empty());

    let (again, _) = send(&app.router, "DELETE", "/api/employees/1", None).await;
    assert_eq!(again, StatusCode::OK);
}

#[tokio::test]
async fn non_numeric_customer_id_is_bad_request() {
    let app = test_app();

    let (status, body) = send(&app.router, "GET", "/api/customers/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn non_numeric_employee_id_is_not_found() {
    let app = test_app();

    let (status, _) = send(&app.router, "GET", "/api/employees/abc", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn find_all_on_empty_store_is_empty_list() {
    let app = test_app();

    let (status, body) = send(&app.router, "GET", "/api/products/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn unknown_route_uses_envelope() {
    let app = test_app();

    let (status, body) = send(&app.router, "GET", "/api/orders", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn health_reports_ping_and_version() {
    let app = test_app();

    let request = Request::builder()
        .uri("/api/health")
        .header("x-request-id", "req-1")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-request-id"], "req-1");
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["data"]["ping"], "pong");
}

#[tokio::test]
async fn product_routes_cover_full_lifecycle() {
    let app = test_app();

    let (status, created) = send(
        &app.router,
        "POST",
        "/api/products/",
        Some(json!({
            "name": "Laptop",
            "description": "High-end laptop",
            "price": 1000.0,
            "stock_qty": 10,
            "category_id": 1,
            "sku": "LPT123",
            "tax_rate": 0.1
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["product_id"], "1");
    assert_eq!(created["data"]["sku"], "LPT123");

    let (status, updated) = send(
        &app.router,
        "PUT",
        "/api/products/1",
        Some(json!({"name": "Laptop Pro", "price": 1500.0, "stock_qty": 4, "sku": "LPT124"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["price"], 1500.0);
    assert_eq!(updated["data"]["description"], "");

    let (status, fetched) = send(&app.router, "GET", "/api/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], updated["data"]);

    let (status, removed) = send(&app.router, "DELETE", "/api/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed, json!({"code": 200, "status": "Deleted Successfully"}));

    let (status, _) = send(&app.router, "GET", "/api/products/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(app.products.is_empty());
}

#[tokio::test]
async fn customer_routes_cover_full_lifecycle() {
    let app = test_app();

    let (status, created) = send(
        &app.router,
        "POST",
        "/api/customers/",
        Some(json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "987654321",
            "address": "456 Avenue",
            "loyalty_pts": 20
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["customer_id"], json!(1));
    assert!(created["data"]["customer_id"].is_i64());

    let (status, fetched) = send(&app.router, "GET", "/api/customers/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], created["data"]);

    let (status, updated) = send(
        &app.router,
        "PUT",
        "/api/customers/1",
        Some(json!({"customer_id": 9, "name": "Jane Smith", "loyalty_pts": 35})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["customer_id"], json!(1));
    assert_eq!(updated["data"]["name"], "Jane Smith");
    assert_eq!(updated["data"]["loyalty_pts"], 35);

    let (status, missing) = send(
        &app.router,
        "PUT",
        "/api/customers/2",
        Some(json!({"name": "Nobody"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["data"], "customer not found: 2");

    let (status, _) = send(&app.router, "DELETE", "/api/customers/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, listed) = send(&app.router, "GET", "/api/customers/", None).await;
    assert_eq!(listed["data"], json!([]));
}

#[tokio::test]
async fn update_with_malformed_employee_id_is_bad_request() {
    let app = test_app();

    let (status, body) = send(
        &app.router,
        "PUT",
        "/api/employees/abc",
        Some(json!({"name": "Jane", "role": "Manager"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["data"],
        "validation failed: employee_id must be a positive identifier"
    );
    assert_eq!(app.employees.save_calls(), 0);
}
