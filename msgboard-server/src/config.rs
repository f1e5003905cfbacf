//! Environment-driven configuration
//!
//! Values are read from the process environment (after any `.env` file has
//! been loaded by the binary). Every key has a default so a bare
//! `msgboard serve` works against the compose database.

use std::net::SocketAddr;
use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

use crate::error::ConfigError;

/// Fixed front-end origin always allowed in addition to `FRONT_URL`
pub const PUBLIC_FRONT_ORIGIN: &str = "https://mensagens.lipwfellipe.site";

const DEFAULT_USER: &str = "postgres";
const DEFAULT_PASSWORD: &str = "135420";
const DEFAULT_DATABASE: &str = "postgres";
const DEFAULT_HOST: &str = "db";
const DEFAULT_PORT: u16 = 5432;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONT_URL: &str = "http://localhost:8080";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// PostgreSQL connection target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub database: String,
    pub host: String,
    pub port: u16,
    /// Full connection string; takes precedence over the discrete fields
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    /// Resolve from `POSTGRES_*`, `DATABASE_URL` and `DB_MAX_CONNECTIONS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve using an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            user: lookup("POSTGRES_USER").unwrap_or(defaults.user),
            password: lookup("POSTGRES_PASSWORD").unwrap_or(defaults.password),
            database: lookup("POSTGRES_DB").unwrap_or(defaults.database),
            host: lookup("POSTGRES_HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "POSTGRES_PORT", defaults.port)?,
            url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
        })
    }

    /// Build sqlx connect options for this target.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        match &self.url {
            Some(url) => url.parse().map_err(ConfigError::DatabaseUrl),
            None => Ok(PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.user)
                .password(&self.password)
                .database(&self.database)),
        }
    }

    /// Human-readable target for logs. Never includes the password.
    pub fn display_target(&self) -> String {
        match &self.url {
            Some(_) => "DATABASE_URL".to_string(),
            None => format!(
                "postgres://{}@{}:{}/{}",
                self.user, self.host, self.port, self.database
            ),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:8000)
    pub bind_addr: SocketAddr,

    /// Primary front-end origin (`FRONT_URL`)
    pub front_url: String,

    /// Additional allowed origins (`CORS_EXTRA_ORIGINS`, comma-separated)
    pub extra_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            front_url: DEFAULT_FRONT_URL.to_string(),
            extra_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                key: "BIND_ADDR",
                value: bind.clone(),
                reason: e.to_string(),
            })?;

        let extra_origins = lookup("CORS_EXTRA_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            bind_addr,
            front_url: lookup("FRONT_URL").unwrap_or_else(|| DEFAULT_FRONT_URL.to_string()),
            extra_origins,
        })
    }

    /// Every origin the CORS layer accepts, deduplicated, in declaration order.
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins: Vec<String> = Vec::new();
        let candidates = std::iter::once(self.front_url.as_str())
            .chain(std::iter::once(PUBLIC_FRONT_ORIGIN))
            .chain(self.extra_origins.iter().map(String::as_str));

        for origin in candidates {
            let origin = origin.trim_end_matches('/');
            if !origins.iter().any(|o| o == origin) {
                origins.push(origin.to_string());
            }
        }
        origins
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            value: raw,
            reason: e.to_string(),
        }),
    }
}
