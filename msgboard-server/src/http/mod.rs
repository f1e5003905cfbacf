//! HTTP server layer
//!
//! Axum server with:
//! - CORS restricted to the configured front-end origins
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, cors_layer, run_server, ServerError};
