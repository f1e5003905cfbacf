//! HTTP server command

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use msgboard_server::{DatabaseConfig, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: BIND_ADDR or 0.0.0.0:8000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Primary front-end origin allowed by CORS (default: FRONT_URL or http://localhost:8080)
    #[arg(long)]
    pub front_url: Option<String>,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

impl ServeArgs {
    fn server_config(&self, mut config: ServerConfig) -> ServerConfig {
        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        if let Some(front_url) = &self.front_url {
            config.front_url = front_url.clone();
        }
        config
    }
}

/// Run the HTTP server (blocks until shutdown)
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = args
        .db
        .apply(DatabaseConfig::from_env().context("Invalid database configuration")?);
    let server_config =
        args.server_config(ServerConfig::from_env().context("Invalid server configuration")?);

    tracing::info!(
        bind = %server_config.bind_addr,
        database = %db_config.display_target(),
        "Starting msgboard server"
    );

    msgboard_server::serve(&db_config, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
