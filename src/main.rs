use anyhow::Context;
use car_sales_api::{
    config::{Config, StorageBackend},
    constants::API_NAME,
    db, handlers,
    state::AppState,
};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()
        .map_err(anyhow::Error::msg)
        .context("Invalid configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("{} Starting Car Sales API on port {}", API_NAME, config.server_port);

    let state = match config.storage {
        StorageBackend::Postgres => {
            let pool = db::create_pool(&config)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("{} Connected to database", API_NAME);

            if config.run_migrations {
                db::run_migrations(&pool)
                    .await
                    .context("Failed to run migrations")?;
                tracing::info!("{} Migrations applied", API_NAME);
            }

            AppState::postgres(pool)
        }
        StorageBackend::Memory => {
            tracing::warn!("{} Using in-memory storage; data is lost on shutdown", API_NAME);
            AppState::in_memory()
        }
    };

    let app = handlers::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("{} Server listening on {}", API_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("{} Server stopped", API_NAME);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("{} Failed to listen for shutdown signal: {}", API_NAME, e);
        std::future::pending::<()>().await;
    }
}
