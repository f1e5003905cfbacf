//! msgboard-server: HTTP message board backed by PostgreSQL
//!
//! Accepts messages over `POST /api/messages` and serves them newest first
//! over `GET /api/messages`. All state lives in the `messages` table.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod state;

pub use config::{DatabaseConfig, ServerConfig};
pub use error::{ConfigError, Error, Result};
pub use state::AppState;

/// Connect, bootstrap the schema and serve until shutdown.
pub async fn serve(db_config: &DatabaseConfig, config: ServerConfig) -> Result<()> {
    let pool = db::connect(db_config).await?;
    db::ensure_schema(&pool).await?;
    http::run_server(pool, config).await
}
