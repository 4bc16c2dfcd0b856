//! Game of Life API server entry point.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use life_api::config::{AppConfig, StoreConfig};
use life_api::error::AppError;
use life_api::state::AppState;
use life_board_store::memory_board_repository::MemoryBoardRepository;
use life_board_store::pg_board_repository::PgBoardRepository;
use life_core::repository::BoardRepository;
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;
    let telemetry = life_api::telemetry::init(config.otlp_endpoint.as_deref())?;

    tracing::info!("Starting Game of Life API server");

    let board_repository = connect_board_store(&config.store).await?;
    let app = life_api::app(AppState::new(board_repository, config.limits));

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    life_api::serve(listener, app, shutdown_signal(), telemetry).await?;
    Ok(())
}

async fn connect_board_store(store: &StoreConfig) -> Result<Arc<dyn BoardRepository>, AppError> {
    match store {
        StoreConfig::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = PgPoolOptions::new()
                .max_connections(*max_connections)
                .connect(database_url)
                .await?;
            life_board_store::MIGRATOR.run(&pool).await?;
            tracing::info!(max_connections, "using PostgreSQL board store");
            Ok(Arc::new(PgBoardRepository::new(pool)))
        }
        StoreConfig::Memory => {
            tracing::warn!("DATABASE_URL not set, boards are kept in memory");
            Ok(Arc::new(MemoryBoardRepository::new()))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
