use crate::{
    abstract_trait::recommendation::{
        repository::DynRecommendationQueryRepository, service::RecommendationQueryServiceTrait,
    },
    domain::response::recommendation::RecommendationResponse,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use shared::{
    domain::parse_valid_product_id,
    errors::ServiceError,
    utils::{Method, Metrics, OperationTracer, ServiceAddress},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct RecommendationQueryService {
    query: DynRecommendationQueryRepository,
    tracer: OperationTracer,
    service_address: ServiceAddress,
}

impl RecommendationQueryService {
    pub fn new(
        query: DynRecommendationQueryRepository,
        metrics: Metrics,
        service_address: ServiceAddress,
    ) -> Self {
        Self {
            query,
            tracer: OperationTracer::new("recommendation-query-service", metrics),
            service_address,
        }
    }
}

#[async_trait]
impl RecommendationQueryServiceTrait for RecommendationQueryService {
    async fn find_by_product_id(
        &self,
        raw_id: &str,
    ) -> Result<Vec<RecommendationResponse>, ServiceError> {
        info!("🔍 Finding recommendations for raw product ID: {raw_id}");

        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "recommendation_find_by_product_id",
            vec![
                KeyValue::new("component", "recommendation"),
                KeyValue::new("operation", "find_by_product_id"),
                KeyValue::new("product.raw_id", raw_id.to_string()),
            ],
        );

        let product_id = match parse_valid_product_id(raw_id) {
            Ok(id) => id,
            Err(e) => {
                self.tracer.failure(&tracing_ctx, method, &e.to_string());
                return Err(e);
            }
        };

        let recommendations = match self.query.find_by_product_id(product_id).await {
            Ok(rows) => rows,
            Err(e) => {
                error!("❌ Store error while finding recommendations for {product_id}: {e:?}");
                self.tracer.failure(&tracing_ctx, method, "Database error");
                return Err(ServiceError::Repo(e));
            }
        };

        self.tracer.success(
            &tracing_ctx,
            method,
            &format!("{} recommendations retrieved", recommendations.len()),
        );

        Ok(recommendations
            .into_iter()
            .map(|r| RecommendationResponse::from_model(r, &self.service_address))
            .collect())
    }
}
