//! Subcommand implementations

pub mod migrate;
pub mod serve;

use clap::Args;
use msgboard_server::DatabaseConfig;

/// Database connection flags shared by subcommands
#[derive(Args, Debug, Clone, Default)]
pub struct DatabaseArgs {
    /// Database URL (overrides POSTGRES_* variables)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Maximum pooled connections (default: DB_MAX_CONNECTIONS or 5)
    #[arg(long)]
    pub max_connections: Option<u32>,
}

impl DatabaseArgs {
    /// Apply flag overrides on top of an environment-derived config.
    pub fn apply(&self, mut config: DatabaseConfig) -> DatabaseConfig {
        if let Some(url) = &self.database_url {
            config.url = Some(url.clone());
        }
        if let Some(max) = self.max_connections {
            config.max_connections = max;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_environment() {
        let args = DatabaseArgs {
            database_url: Some("postgres://localhost/board".into()),
            max_connections: Some(2),
        };
        let config = args.apply(DatabaseConfig::default());
        assert_eq!(config.url.as_deref(), Some("postgres://localhost/board"));
        assert_eq!(config.max_connections, 2);
    }

    #[test]
    fn no_flags_keep_environment() {
        let config = DatabaseArgs::default().apply(DatabaseConfig::default());
        assert_eq!(config, DatabaseConfig::default());
    }
}
