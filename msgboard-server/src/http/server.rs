//! Axum server setup
//!
//! Server skeleton with:
//! - CORS limited to the configured origins, credentials allowed
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::config::ServerConfig;
use crate::error::ConfigError;
use crate::state::AppState;

/// Build the CORS layer for a fixed origin allow-list.
///
/// Methods and headers are mirrored from the preflight request: with
/// credentials enabled the `*` wildcard is not allowed by browsers.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, ConfigError> {
    let origins = origins
        .iter()
        .map(|origin| {
            if origin == "*" {
                return Err(ConfigError::InvalidOrigin(origin.clone()));
            }
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Build the application router with all routes
///
/// Message bodies are only bounded by storage, so axum's default request
/// body limit is disabled.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::messages::router())
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let pool = db::connect(&db_config).await?;
/// db::ensure_schema(&pool).await?;
/// run_server(pool, ServerConfig::from_env()?).await?;
/// ```
pub async fn run_server(pool: PgPool, config: ServerConfig) -> crate::Result<()> {
    let origins = config.allowed_origins();
    let cors = cors_layer(&origins)?;
    tracing::info!(origins = ?origins, "CORS allow-list configured");

    let app = build_router(AppState::from_pool(pool), cors);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(ServerError::Io)?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Io)?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
