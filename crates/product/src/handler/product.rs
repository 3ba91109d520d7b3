use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    domain::{requests::product::CreateProductRequest, response::product::ProductResponse},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, rejection::PathRejection},
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    domain::parse_product_id,
    errors::{ErrorResponse, HttpError},
    middleware::JsonBody,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/product/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ProductResponse),
        (status = 400, description = "Identifier is not an integer", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 422, description = "Identifier is not positive", body = ErrorResponse)
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    uri: Uri,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let Path(id) = id.map_err(|_| HttpError::type_mismatch(uri.path()))?;

    let product = service
        .find_by_product_id(&id)
        .await
        .map_err(|e| HttpError::from_service(uri.path(), e))?;

    Ok((StatusCode::OK, Json(product)))
}

#[utoipa::path(
    post,
    path = "/product",
    tag = "Product",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Product created", body = ProductResponse),
        (status = 400, description = "Malformed or invalid body", body = ErrorResponse),
        (status = 422, description = "Non-positive or duplicate product ID", body = ErrorResponse)
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    uri: Uri,
    JsonBody(body): JsonBody<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let product = service
        .create_product(&body)
        .await
        .map_err(|e| HttpError::from_service(uri.path(), e))?;

    Ok((StatusCode::OK, Json(product)))
}

#[utoipa::path(
    delete,
    path = "/product/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted, or was already absent"),
        (status = 400, description = "Identifier is not an integer", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductCommandService>,
    uri: Uri,
    id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let Path(id) = id.map_err(|_| HttpError::type_mismatch(uri.path()))?;

    let product_id = parse_product_id(&id).map_err(|e| HttpError::from_service(uri.path(), e))?;

    service
        .delete_product(product_id)
        .await
        .map_err(|e| HttpError::from_service(uri.path(), e))?;

    Ok(StatusCode::OK)
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/product/{id}", get(get_product).delete(delete_product))
        .route("/product", post(create_product))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
}
