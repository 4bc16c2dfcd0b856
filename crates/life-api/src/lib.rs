//! Game of Life HTTP API.
//!
//! Exposes board creation and the engine's step, multi-step and
//! fixed-point queries over JSON.

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

/// Builds the full application router.
pub fn app(state: state::AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::docs::router())
        .nest("/api/v1/boards", routes::boards::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serves `app` on `listener` until `shutdown` resolves, then flushes
/// `telemetry`. The flush runs whether or not the server exited cleanly.
///
/// # Errors
///
/// Returns `AppError::Server` if the server fails.
pub async fn serve<S>(
    listener: TcpListener,
    app: Router,
    shutdown: S,
    telemetry: telemetry::Telemetry,
) -> Result<(), error::AppError>
where
    S: Future<Output = ()> + Send + 'static,
{
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await;
    telemetry.shutdown();
    served.map_err(error::AppError::from)
}
