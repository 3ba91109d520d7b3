use anyhow::{Context, Result};
use recommendation::{
    DEFAULT_PORT, SERVICE_NAME, di::DependenciesInjectDeps, handler::AppRouter,
    repository::memory::InMemoryRecommendationRepository, state::AppState,
};
use shared::{
    config::{Config, ConnectionManager, ConnectionPool, StoreBackend},
    utils::{ServiceAddress, Telemetry, init_logger},
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init(DEFAULT_PORT).context("Failed to load configuration")?;

    let telemetry = match config.otel_endpoint.as_deref() {
        Some(endpoint) => {
            Some(Telemetry::init(SERVICE_NAME, endpoint).context("Failed to initialize telemetry")?)
        }
        None => None,
    };

    init_logger(
        telemetry.as_ref().map(Telemetry::logger_provider),
        SERVICE_NAME,
        config.dev_mode,
        config.enable_file_log,
    );

    info!("🚀 Starting Recommendation Service initialization...");

    let service_address = ServiceAddress::new(&config.service_host, config.port);

    let deps = match config.store_backend {
        StoreBackend::Postgres => {
            let pool = setup_database(&config).await?;
            DependenciesInjectDeps::postgres(pool, service_address)
        }
        StoreBackend::Memory => {
            warn!("⚠️ Using in-memory recommendation store, data is lost on restart");
            DependenciesInjectDeps::in_memory(
                Arc::new(InMemoryRecommendationRepository::new()),
                service_address,
            )
        }
    };

    let state = AppState::new(deps);

    info!("✅ Application setup completed successfully.");

    let result = AppRouter::serve(config.port, state).await;

    if let Some(telemetry) = telemetry
        && let Err(e) = telemetry.shutdown()
    {
        error!("Failed to shutdown telemetry: {e}");
    }

    info!("✅ Recommendation Service shutdown complete.");

    result
}

async fn setup_database(config: &Config) -> Result<ConnectionPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is required for the postgres store")?;

    let pool = ConnectionManager::new_pool(database_url, config.db_min_conn, config.db_max_conn)
        .await
        .context("Failed to initialize database pool")?;

    if config.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run database migrations")?;
        info!("✅ Database migrations applied");
    }

    Ok(pool)
}
