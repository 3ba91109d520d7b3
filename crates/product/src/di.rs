use crate::{
    abstract_trait::product::{
        repository::{DynProductCommandRepository, DynProductQueryRepository},
        service::{DynProductCommandService, DynProductQueryService},
    },
    repository::{
        command::ProductCommandRepository, memory::InMemoryProductRepository,
        query::ProductQueryRepository,
    },
    service::{command::ProductCommandService, query::ProductQueryService},
};
use prometheus_client::registry::Registry;
use shared::{
    config::ConnectionPool,
    utils::{Metrics, ServiceAddress},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub product_query_repo: DynProductQueryRepository,
    pub product_command_repo: DynProductCommandRepository,
    pub service_address: ServiceAddress,
}

impl DependenciesInjectDeps {
    pub fn postgres(pool: ConnectionPool, service_address: ServiceAddress) -> Self {
        Self {
            product_query_repo: Arc::new(ProductQueryRepository::new(pool.clone())),
            product_command_repo: Arc::new(ProductCommandRepository::new(pool)),
            service_address,
        }
    }

    pub fn in_memory(
        store: Arc<InMemoryProductRepository>,
        service_address: ServiceAddress,
    ) -> Self {
        Self {
            product_query_repo: store.clone(),
            product_command_repo: store,
            service_address,
        }
    }
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps {
            product_query_repo,
            product_command_repo,
            service_address,
        } = deps;

        let metrics = Metrics::new();
        metrics.register("product_service", registry);

        let product_query: DynProductQueryService = Arc::new(ProductQueryService::new(
            product_query_repo,
            metrics.clone(),
            service_address.clone(),
        ));

        let product_command: DynProductCommandService = Arc::new(ProductCommandService::new(
            product_command_repo,
            metrics,
            service_address,
        ));

        Self {
            product_query,
            product_command,
        }
    }
}
