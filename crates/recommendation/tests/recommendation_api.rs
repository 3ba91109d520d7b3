use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use recommendation::{
    di::DependenciesInjectDeps, handler::AppRouter,
    repository::memory::InMemoryRecommendationRepository, state::AppState,
};
use serde_json::{Value, json};
use shared::utils::ServiceAddress;
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> (Router, Arc<InMemoryRecommendationRepository>) {
    let store = Arc::new(InMemoryRecommendationRepository::new());
    let deps = DependenciesInjectDeps::in_memory(
        store.clone(),
        ServiceAddress::new("recommendation-test", 7002),
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

async fn create(app: &Router, product_id: i32, recommendation_id: i32) -> (StatusCode, Value) {
    send_json(
        app,
        Method::POST,
        "/recommendation",
        Some(json!({
            "productId": product_id,
            "recommendationId": recommendation_id,
            "author": "author-1",
            "rate": 1,
            "content": "content-1"
        })),
    )
    .await
}

#[tokio::test]
async fn create_then_list_by_product() {
    let (app, _) = app();

    let (status, body) = create(&app, 1, 1).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["productId"], 1);
    assert_eq!(body["rate"], 1);

    create(&app, 1, 2).await;
    create(&app, 2, 1).await;

    let (status, body) = send_json(&app, Method::GET, "/recommendation?productId=1", None).await;
    assert_eq!(status, StatusCode::OK);

    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["recommendationId"], 1);
    assert_eq!(list[1]["recommendationId"], 2);
    assert_eq!(list[0]["serviceAddress"], "recommendation-test:7002");
}

#[tokio::test]
async fn unknown_product_lists_nothing() {
    let (app, _) = app();

    let (status, body) = send_json(&app, Method::GET, "/recommendation?productId=113", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn missing_or_malformed_product_id_is_bad_request() {
    let (app, _) = app();

    for uri in ["/recommendation", "/recommendation?productId=no-integer"] {
        let (status, body) = send_json(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["path"], "/recommendation");
        assert_eq!(body["message"], "Type mismatch.");
    }

    let (status, body) = send_json(&app, Method::DELETE, "/recommendation", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Type mismatch.");
}

#[tokio::test]
async fn non_positive_product_id_is_unprocessable() {
    let (app, _) = app();

    let (status, body) = send_json(&app, Method::GET, "/recommendation?productId=-1", None).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "invalid productID: -1");
}

#[tokio::test]
async fn duplicate_create_is_unprocessable() {
    let (app, store) = app();
    create(&app, 1, 1).await;

    let (status, body) = create(&app, 1, 1).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["message"],
        "Duplicate key, Product Id: 1, Recommendation Id:1"
    );
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn delete_is_idempotent() {
    let (app, store) = app();
    create(&app, 1, 1).await;
    create(&app, 1, 2).await;

    let (status, _, body) = send(&app, Method::DELETE, "/recommendation?productId=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert!(store.is_empty().await);

    let (status, _, _) = send(&app, Method::DELETE, "/recommendation?productId=1", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn health_metrics_and_openapi_are_served() {
    let (app, _) = app();
    create(&app, 1, 1).await;

    let (status, body) = send_json(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "UP");

    let (status, _, body) = send(&app, Method::GET, "/metrics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        String::from_utf8(body)
            .unwrap()
            .contains("recommendation_service_requests_total")
    );

    let (status, body) = send_json(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/recommendation"]["get"].is_object());
}

#[tokio::test]
async fn repeated_product_id_parameter_is_type_mismatch() {
    let (app, _) = app();

    for method in [Method::GET, Method::DELETE] {
        let (status, body) = send_json(
            &app,
            method.clone(),
            "/recommendation?productId=1&productId=2",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method}");
        assert_eq!(body["path"], "/recommendation");
        assert_eq!(body["message"], "Type mismatch.");
    }
}

#[tokio::test]
async fn overlong_author_is_bad_request() {
    let (app, store) = app();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/recommendation",
        Some(json!({
            "productId": 1,
            "recommendationId": 1,
            "author": "a".repeat(256),
            "rate": 1,
            "content": "content-1"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "author: Author must be 1 to 255 characters");
    assert!(store.is_empty().await);
}
