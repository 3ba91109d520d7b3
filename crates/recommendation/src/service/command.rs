use crate::{
    abstract_trait::recommendation::{
        repository::DynRecommendationCommandRepository, service::RecommendationCommandServiceTrait,
    },
    domain::{
        requests::recommendation::CreateRecommendationRequest,
        response::recommendation::RecommendationResponse,
    },
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use shared::{
    domain::ensure_valid_product_id,
    errors::{RepositoryError, ServiceError},
    middleware::format_validation_errors,
    utils::{Method, Metrics, OperationTracer, ServiceAddress},
};
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct RecommendationCommandService {
    command: DynRecommendationCommandRepository,
    tracer: OperationTracer,
    service_address: ServiceAddress,
}

impl RecommendationCommandService {
    pub fn new(
        command: DynRecommendationCommandRepository,
        metrics: Metrics,
        service_address: ServiceAddress,
    ) -> Self {
        Self {
            command,
            tracer: OperationTracer::new("recommendation-command-service", metrics),
            service_address,
        }
    }
}

#[async_trait]
impl RecommendationCommandServiceTrait for RecommendationCommandService {
    async fn create_recommendation(
        &self,
        req: &CreateRecommendationRequest,
    ) -> Result<RecommendationResponse, ServiceError> {
        info!(
            "🏗️ Creating recommendation {} for productId {}",
            req.recommendation_id, req.product_id
        );

        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "recommendation_create",
            vec![
                KeyValue::new("component", "recommendation"),
                KeyValue::new("operation", "create"),
                KeyValue::new("product.id", req.product_id.to_string()),
                KeyValue::new("recommendation.id", req.recommendation_id.to_string()),
            ],
        );

        if let Err(e) = ensure_valid_product_id(req.product_id) {
            self.tracer.failure(&tracing_ctx, method, &e.to_string());
            return Err(e);
        }

        if let Err(validation_errors) = req.validate() {
            let msg = format_validation_errors(&validation_errors);
            self.tracer.failure(&tracing_ctx, method, &msg);
            return Err(ServiceError::Validation(vec![msg]));
        }

        let recommendation = match self.command.create_recommendation(req).await {
            Ok(recommendation) => recommendation,
            Err(RepositoryError::AlreadyExists(_)) => {
                let msg = format!(
                    "Duplicate key, Product Id: {}, Recommendation Id:{}",
                    req.product_id, req.recommendation_id
                );
                self.tracer.failure(&tracing_ctx, method, &msg);
                return Err(ServiceError::InvalidArgument(msg));
            }
            Err(e) => {
                error!(
                    "❌ Failed to create recommendation {}/{}: {e:?}",
                    req.product_id, req.recommendation_id
                );
                self.tracer
                    .failure(&tracing_ctx, method, "Failed to create recommendation");
                return Err(ServiceError::Repo(e));
            }
        };

        self.tracer
            .success(&tracing_ctx, method, "Recommendation created successfully");

        Ok(RecommendationResponse::from_model(
            recommendation,
            &self.service_address,
        ))
    }

    async fn delete_recommendations(&self, product_id: i32) -> Result<(), ServiceError> {
        info!("🗑️ Deleting recommendations for productId: {product_id}");

        let method = Method::Delete;
        let tracing_ctx = self.tracer.start(
            "recommendation_delete",
            vec![
                KeyValue::new("component", "recommendation"),
                KeyValue::new("operation", "delete"),
                KeyValue::new("product.id", product_id.to_string()),
            ],
        );

        match self.command.delete_by_product_id(product_id).await {
            Ok(()) => {
                self.tracer
                    .success(&tracing_ctx, method, "Recommendations deleted");
                Ok(())
            }
            Err(e) => {
                error!("❌ Failed to delete recommendations for {product_id}: {e:?}");
                self.tracer
                    .failure(&tracing_ctx, method, "Failed to delete recommendations");
                Err(ServiceError::Repo(e))
            }
        }
    }
}
