use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use product::{
    di::DependenciesInjectDeps, handler::AppRouter, repository::memory::InMemoryProductRepository,
    state::AppState,
};
use serde_json::{Value, json};
use shared::utils::ServiceAddress;
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> (Router, Arc<InMemoryProductRepository>) {
    let store = Arc::new(InMemoryProductRepository::new());
    let deps = DependenciesInjectDeps::in_memory(
        store.clone(),
        ServiceAddress::new("product-test", 7001),
    );

    (AppRouter::build(AppState::new(deps)), store)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Option<String>, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, content_type, bytes.to_vec())
}

async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, content_type, bytes) = send(app, method, uri, body).await;
    assert_eq!(content_type.as_deref(), Some("application/json"));
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn create(app: &Router, product_id: i32) -> (StatusCode, Value) {
    send_json(
        app,
        Method::POST,
        "/product",
        Some(json!({ "productId": product_id, "name": format!("name-{product_id}"), "weight": 1 })),
    )
    .await
}

#[tokio::test]
async fn create_then_get_returns_product() {
    let (app, store) = app();

    let (status, body) = create(&app, 1).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["productId"], 1);
    assert_eq!(store.len().await, 1);

    let (status, body) = send_json(&app, Method::GET, "/product/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["productId"], 1);
    assert_eq!(body["name"], "name-1");
    assert_eq!(body["weight"], 1);
    assert_eq!(body["serviceAddress"], "product-test:7001");
}

#[tokio::test]
async fn get_missing_product_is_not_found() {
    let (app, _) = app();

    let (status, body) = send_json(&app, Method::GET, "/product/13", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["path"], "/product/13");
    assert_eq!(body["message"], "No product found for productID:13");
}

#[tokio::test]
async fn get_non_integer_id_is_bad_request() {
    let (app, _) = app();

    let (status, body) = send_json(&app, Method::GET, "/product/no-integer", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["path"], "/product/no-integer");
    assert_eq!(body["message"], "Type mismatch.");
}

#[tokio::test]
async fn get_non_positive_id_is_unprocessable() {
    let (app, _) = app();

    let (status, body) = send_json(&app, Method::GET, "/product/-1", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["path"], "/product/-1");
    assert_eq!(body["message"], "invalid productID: -1");

    let (status, body) = send_json(&app, Method::GET, "/product/0", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "invalid productID: 0");
}

#[tokio::test]
async fn delete_is_idempotent() {
    let (app, store) = app();
    create(&app, 1).await;

    let (status, _, body) = send(&app, Method::DELETE, "/product/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert!(store.is_empty().await);

    let (status, _, _) = send(&app, Method::DELETE, "/product/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_json(&app, Method::GET, "/product/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No product found for productID:1");
}

#[tokio::test]
async fn delete_non_integer_id_is_bad_request() {
    let (app, _) = app();

    let (status, body) = send_json(&app, Method::DELETE, "/product/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Type mismatch.");
}

#[tokio::test]
async fn duplicate_create_is_unprocessable() {
    let (app, store) = app();
    create(&app, 1).await;

    let (status, body) = create(&app, 1).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["path"], "/product");
    assert_eq!(body["message"], "Duplicate key, Product Id: 1");
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn create_with_non_positive_id_is_unprocessable() {
    let (app, store) = app();

    let (status, body) = create(&app, -5).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "invalid productID: -5");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn create_with_malformed_body_is_bad_request() {
    let (app, store) = app();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/product",
        Some(json!({ "productId": "one", "name": "name-1", "weight": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["path"], "/product");

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/product",
        Some(json!({ "productId": 2, "name": "", "weight": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "name: Name must be 1 to 255 characters");

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn metrics_report_service_operations() {
    let (app, _) = app();
    create(&app, 1).await;
    send(&app, Method::GET, "/product/1", None).await;

    let (status, content_type, body) = send(&app, Method::GET, "/metrics", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("application/openmetrics-text"));
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("product_service_requests_total"));
    assert!(text.contains("method=\"Post\""));
}

#[tokio::test]
async fn health_and_openapi_are_served() {
    let (app, _) = app();

    let (status, body) = send_json(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "UP" }));

    let (status, body) = send_json(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/product/{id}"]["get"].is_object());
    assert!(body["paths"]["/product"]["post"].is_object());
}

#[tokio::test]
async fn undecodable_path_segment_is_type_mismatch() {
    let (app, _) = app();

    for method in [Method::GET, Method::DELETE] {
        let (status, body) = send_json(&app, method.clone(), "/product/%FF", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method}");
        assert_eq!(body["path"], "/product/%FF");
        assert_eq!(body["message"], "Type mismatch.");
    }
}

#[tokio::test]
async fn overlong_name_is_bad_request() {
    let (app, store) = app();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/product",
        Some(json!({ "productId": 1, "name": "n".repeat(256), "weight": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "name: Name must be 1 to 255 characters");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn non_positive_id_wins_over_invalid_name() {
    let (app, store) = app();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/product",
        Some(json!({ "productId": 0, "name": "", "weight": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "invalid productID: 0");
    assert!(store.is_empty().await);
}
