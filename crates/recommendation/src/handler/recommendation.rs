use crate::{
    abstract_trait::recommendation::service::{
        DynRecommendationCommandService, DynRecommendationQueryService,
    },
    domain::{
        requests::recommendation::{CreateRecommendationRequest, ProductIdQuery},
        response::recommendation::RecommendationResponse,
    },
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Query, rejection::QueryRejection},
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
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
    path = "/recommendation",
    tag = "Recommendation",
    params(ProductIdQuery),
    responses(
        (status = 200, description = "Recommendations of the product, possibly empty", body = Vec<RecommendationResponse>),
        (status = 400, description = "productId missing or not an integer", body = ErrorResponse),
        (status = 422, description = "productId is not positive", body = ErrorResponse)
    )
)]
pub async fn get_recommendations(
    Extension(service): Extension<DynRecommendationQueryService>,
    uri: Uri,
    params: Result<Query<ProductIdQuery>, QueryRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let Query(params) = params.map_err(|_| HttpError::type_mismatch(uri.path()))?;
    let raw_id = params.product_id.unwrap_or_default();

    let recommendations = service
        .find_by_product_id(&raw_id)
        .await
        .map_err(|e| HttpError::from_service(uri.path(), e))?;

    Ok((StatusCode::OK, Json(recommendations)))
}

#[utoipa::path(
    post,
    path = "/recommendation",
    tag = "Recommendation",
    request_body = CreateRecommendationRequest,
    responses(
        (status = 200, description = "Recommendation created", body = RecommendationResponse),
        (status = 400, description = "Malformed or invalid body", body = ErrorResponse),
        (status = 422, description = "Non-positive product ID or duplicate key", body = ErrorResponse)
    )
)]
pub async fn create_recommendation(
    Extension(service): Extension<DynRecommendationCommandService>,
    uri: Uri,
    JsonBody(body): JsonBody<CreateRecommendationRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let recommendation = service
        .create_recommendation(&body)
        .await
        .map_err(|e| HttpError::from_service(uri.path(), e))?;

    Ok((StatusCode::OK, Json(recommendation)))
}

#[utoipa::path(
    delete,
    path = "/recommendation",
    tag = "Recommendation",
    params(ProductIdQuery),
    responses(
        (status = 200, description = "Recommendations deleted, or none were stored"),
        (status = 400, description = "productId missing or not an integer", body = ErrorResponse)
    )
)]
pub async fn delete_recommendations(
    Extension(service): Extension<DynRecommendationCommandService>,
    uri: Uri,
    params: Result<Query<ProductIdQuery>, QueryRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let Query(params) = params.map_err(|_| HttpError::type_mismatch(uri.path()))?;
    let raw_id = params.product_id.unwrap_or_default();
    let product_id =
        parse_product_id(&raw_id).map_err(|e| HttpError::from_service(uri.path(), e))?;

    service
        .delete_recommendations(product_id)
        .await
        .map_err(|e| HttpError::from_service(uri.path(), e))?;

    Ok(StatusCode::OK)
}

pub fn recommendation_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/recommendation",
            get(get_recommendations)
                .post(create_recommendation)
                .delete(delete_recommendations),
        )
        .layer(Extension(
            app_state.di_container.recommendation_query.clone(),
        ))
        .layer(Extension(
            app_state.di_container.recommendation_command.clone(),
        ))
}
