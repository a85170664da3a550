//! Server entry point: loads configuration, seeds the store and serves HTTP.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use users_api::adapters::http::build_router;
use users_api::adapters::InMemoryUserRepository;
use users_api::config::{AppConfig, ConfigError};
use users_api::domain::user::sample_profiles;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;

    init_tracing(&config);

    let repository = if config.features.seed_sample_users {
        let profiles = sample_profiles()?;
        info!(count = profiles.len(), "Seeding sample users");
        InMemoryUserRepository::with_profiles(profiles)
    } else {
        InMemoryUserRepository::new()
    };

    let app = build_router(Arc::new(repository), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(
        %addr,
        environment = ?config.server.environment,
        "Users API listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let result = if config.is_production() {
        fmt().with_env_filter(filter).json().try_init()
    } else {
        fmt().with_env_filter(filter).try_init()
    };

    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
