//! Car Rental API - Main Entry Point

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use car_rental::domain::gateways::RateProvider;
use car_rental::infrastructure::driven_adapters::config::{LogFormat, RateProviderKind, RatesConfig};
use car_rental::infrastructure::driven_adapters::database::{create_pool, run_migrations};
use car_rental::infrastructure::driven_adapters::{
    AppConfig, NbpRateProvider, PostgresCarRepository, PostgresClientRepository,
    PostgresEquipmentRepository, PostgresRentalRepository, StaticRateProvider,
};
use car_rental::infrastructure::driving_adapters::api_rest::{self, AppState, Gateways};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first: it selects the log format
    let config = AppConfig::load()?;

    init_tracing(config.logging.format);
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    run_migrations(&pool).await?;
    tracing::info!("Database migrations completed");

    let gateways = Gateways {
        rentals: Arc::new(PostgresRentalRepository::new(pool.clone())),
        cars: Arc::new(PostgresCarRepository::new(pool.clone())),
        clients: Arc::new(PostgresClientRepository::new(pool.clone())),
        equipment: Arc::new(PostgresEquipmentRepository::new(pool)),
        rates: rate_provider(&config.rates)?,
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = api_rest::app(AppState::new(gateways));

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "car_rental=debug,tower_http=debug".into());

    let (pretty, json) = match format {
        LogFormat::Pretty => (Some(tracing_subscriber::fmt::layer()), None),
        LogFormat::Json => (None, Some(tracing_subscriber::fmt::layer().json())),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .init();
}

fn rate_provider(config: &RatesConfig) -> anyhow::Result<Arc<dyn RateProvider>> {
    let provider: Arc<dyn RateProvider> = match config.provider {
        RateProviderKind::Static => {
            tracing::info!(pln_usd = %config.pln_usd, pln_eur = %config.pln_eur, "Using static exchange rates");
            Arc::new(StaticRateProvider::new(config.pln_usd, config.pln_eur))
        }
        RateProviderKind::Nbp => {
            tracing::info!(base_url = %config.nbp_base_url, "Using NBP exchange rates");
            Arc::new(NbpRateProvider::new(
                config.nbp_base_url.clone(),
                Duration::from_secs(config.timeout_secs),
            )?)
        }
    };
    Ok(provider)
}
