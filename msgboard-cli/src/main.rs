//! msgboard CLI - runs the message board HTTP server
//!
//! Subcommands:
//! - `serve`: bootstrap the schema and serve the HTTP API
//! - `migrate`: bootstrap the schema and exit

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "msgboard",
    author,
    version,
    about = "Message board backend: create and list messages over HTTP, stored in PostgreSQL"
)]
struct Cli {
    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the messages table if it does not exist, then exit
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let dotenv = config::load_dotenv();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;
    config::report_dotenv(&dotenv);

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::Migrate(args) => commands::migrate::run_migrate(args).await,
    }
}
