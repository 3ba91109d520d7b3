mod product;

use crate::state::AppState;
use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::get,
};
use prometheus_client::encoding::text::encode;
use serde_json::json;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

pub use self::product::product_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        product::get_product,
        product::create_product,
        product::delete_product,
    ),
    tags(
        (name = "Product", description = "Product endpoints"),
    )
)]
struct ApiDoc;

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    let mut buffer = String::new();

    if let Err(e) = encode(&mut buffer, &state.registry) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode metrics: {e}"),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        buffer,
    )
        .into_response()
}

pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "UP" }))
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .route("/health", get(health_handler))
            .with_state(shared_state.clone())
            .merge(product_routes(shared_state));

        let (app_router, api) = api_router.split_for_parts();

        app_router
            .route(
                "/api-docs/openapi.json",
                get(move || {
                    let api = api.clone();
                    async move { Json(api) }
                }),
            )
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(1024 * 1024))
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("🚀 Product service listening on http://{}", listener.local_addr()?);
        info!("📖 OpenAPI document: http://localhost:{port}/api-docs/openapi.json");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server terminated unexpectedly")?;

        Ok(())
    }
}
