//! Environment loading

use std::path::PathBuf;

use tracing::{debug, info, warn};

/// Load variables from `./.env` if present.
///
/// Variables already set in the environment win over the file. Runs before
/// tracing is initialised so `RUST_LOG` may come from the file; pass the
/// result to [`report_dotenv`] once logging is up.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

pub fn report_dotenv(result: &Result<Option<PathBuf>, dotenvy::Error>) {
    match result {
        Ok(Some(path)) => info!("Loaded configuration from {}", path.display()),
        Ok(None) => debug!("No .env file found, using environment only"),
        Err(e) => warn!(error = %e, "Failed to parse .env, using environment only"),
    }
}
