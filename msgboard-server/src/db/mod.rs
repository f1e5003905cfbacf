//! Database layer - connection pool, schema bootstrap and repositories
//!
//! # Design Principles
//!
//! - Connection pool shared by handle - no global engine
//! - One statement per operation, no multi-request transactions
//! - Rely on DB constraints for integrity, no check-then-insert

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{connect, create_pool};
pub use repos::*;
pub use schema::ensure_schema;
