use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::response::product::ProductResponse,
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
pub struct ProductQueryService {
    query: DynProductQueryRepository,
    tracer: OperationTracer,
    service_address: ServiceAddress,
}

impl ProductQueryService {
    pub fn new(
        query: DynProductQueryRepository,
        metrics: Metrics,
        service_address: ServiceAddress,
    ) -> Self {
        Self {
            query,
            tracer: OperationTracer::new("product-query-service", metrics),
            service_address,
        }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_by_product_id(&self, raw_id: &str) -> Result<ProductResponse, ServiceError> {
        info!("🆔 Finding product by raw ID: {raw_id}");

        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "product_find_by_id",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_by_id"),
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

        let product = match self.query.find_by_product_id(product_id).await {
            Ok(Some(product)) => {
                self.tracer
                    .success(&tracing_ctx, method, "Product retrieved from store");
                product
            }
            Ok(None) => {
                let msg = format!("No product found for productID:{product_id}");
                self.tracer.failure(&tracing_ctx, method, &msg);
                return Err(ServiceError::NotFound(msg));
            }
            Err(e) => {
                error!("❌ Store error while finding product ID {product_id}: {e:?}");
                self.tracer.failure(&tracing_ctx, method, "Database error");
                return Err(ServiceError::Repo(e));
            }
        };

        info!("✅ Product retrieved: '{}' (ID: {product_id})", product.name);

        Ok(ProductResponse::from_model(product, &self.service_address))
    }
}
