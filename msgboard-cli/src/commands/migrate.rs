//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;
use msgboard_server::{db, DatabaseConfig};

use super::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Create the messages table if missing
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let config = args
        .db
        .apply(DatabaseConfig::from_env().context("Invalid database configuration")?);

    let pool = db::connect(&config)
        .await
        .context("Failed to create database pool")?;
    db::ensure_schema(&pool)
        .await
        .context("Failed to create messages table")?;

    pool.close().await;
    println!("messages table ready on {}", config.display_target());
    Ok(())
}
