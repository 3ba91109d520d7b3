use crate::{
    abstract_trait::product::{
        repository::DynProductCommandRepository, service::ProductCommandServiceTrait,
    },
    domain::{requests::product::CreateProductRequest, response::product::ProductResponse},
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
pub struct ProductCommandService {
    command: DynProductCommandRepository,
    tracer: OperationTracer,
    service_address: ServiceAddress,
}

impl ProductCommandService {
    pub fn new(
        command: DynProductCommandRepository,
        metrics: Metrics,
        service_address: ServiceAddress,
    ) -> Self {
        Self {
            command,
            tracer: OperationTracer::new("product-command-service", metrics),
            service_address,
        }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("🏗️ Creating product with productId: {}", req.product_id);

        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "product_create",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "create"),
                KeyValue::new("product.id", req.product_id.to_string()),
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

        let product = match self.command.create_product(req).await {
            Ok(product) => product,
            Err(RepositoryError::AlreadyExists(_)) => {
                let msg = format!("Duplicate key, Product Id: {}", req.product_id);
                self.tracer.failure(&tracing_ctx, method, &msg);
                return Err(ServiceError::InvalidArgument(msg));
            }
            Err(e) => {
                error!("❌ Failed to create product {}: {e:?}", req.product_id);
                self.tracer
                    .failure(&tracing_ctx, method, "Failed to create product");
                return Err(ServiceError::Repo(e));
            }
        };

        self.tracer
            .success(&tracing_ctx, method, "Product created successfully");

        Ok(ProductResponse::from_model(product, &self.service_address))
    }

    async fn delete_product(&self, product_id: i32) -> Result<(), ServiceError> {
        info!("🗑️ Deleting product with productId: {product_id}");

        let method = Method::Delete;
        let tracing_ctx = self.tracer.start(
            "product_delete",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "delete"),
                KeyValue::new("product.id", product_id.to_string()),
            ],
        );

        match self.command.delete_by_product_id(product_id).await {
            Ok(()) => {
                self.tracer
                    .success(&tracing_ctx, method, "Product deleted successfully");
                Ok(())
            }
            Err(e) => {
                error!("❌ Failed to delete product {product_id}: {e:?}");
                self.tracer
                    .failure(&tracing_ctx, method, "Failed to delete product");
                Err(ServiceError::Repo(e))
            }
        }
    }
}
