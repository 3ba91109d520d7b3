use crate::{
    abstract_trait::recommendation::{
        repository::{DynRecommendationCommandRepository, DynRecommendationQueryRepository},
        service::{DynRecommendationCommandService, DynRecommendationQueryService},
    },
    repository::{
        command::RecommendationCommandRepository, memory::InMemoryRecommendationRepository,
        query::RecommendationQueryRepository,
    },
    service::{command::RecommendationCommandService, query::RecommendationQueryService},
};
use prometheus_client::registry::Registry;
use shared::{
    config::ConnectionPool,
    utils::{Metrics, ServiceAddress},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub recommendation_query: DynRecommendationQueryService,
    pub recommendation_command: DynRecommendationCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("recommendation_query", &"RecommendationQueryService")
            .field("recommendation_command", &"RecommendationCommandService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub recommendation_query_repo: DynRecommendationQueryRepository,
    pub recommendation_command_repo: DynRecommendationCommandRepository,
    pub service_address: ServiceAddress,
}

impl DependenciesInjectDeps {
    pub fn postgres(pool: ConnectionPool, service_address: ServiceAddress) -> Self {
        Self {
            recommendation_query_repo: Arc::new(RecommendationQueryRepository::new(pool.clone())),
            recommendation_command_repo: Arc::new(RecommendationCommandRepository::new(pool)),
            service_address,
        }
    }

    pub fn in_memory(
        store: Arc<InMemoryRecommendationRepository>,
        service_address: ServiceAddress,
    ) -> Self {
        Self {
            recommendation_query_repo: store.clone(),
            recommendation_command_repo: store,
            service_address,
        }
    }
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps {
            recommendation_query_repo,
            recommendation_command_repo,
            service_address,
        } = deps;

        let metrics = Metrics::new();
        metrics.register("recommendation_service", registry);

        let recommendation_query: DynRecommendationQueryService =
            Arc::new(RecommendationQueryService::new(
                recommendation_query_repo,
                metrics.clone(),
                service_address.clone(),
            ));

        let recommendation_command: DynRecommendationCommandService =
            Arc::new(RecommendationCommandService::new(
                recommendation_command_repo,
                metrics,
                service_address,
            ));

        Self {
            recommendation_query,
            recommendation_command,
        }
    }
}
