//! Error types for msgboard-server

use thiserror::Error;

use crate::db::DbError;
use crate::http::ServerError;

pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for startup and serving
#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] DbError),

    #[error("connection error: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("server error: {0}")]
    Server(#[from] ServerError),
}

/// Invalid or unparsable configuration value
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid DATABASE_URL: {0}")]
    DatabaseUrl(#[source] sqlx::Error),

    #[error("invalid CORS origin '{0}'")]
    InvalidOrigin(String),
}
