//! HTTP server command
//!
//! Opens the selected idea store and serves `/api/ideas` until shutdown.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use ideaboard_server::db::DEFAULT_MAX_CONNECTIONS;
use ideaboard_server::{open_store, run_server, ServerConfig, StoreConfig};

/// Storage backend selection
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// PostgreSQL (requires DATABASE_URL)
    Postgres,
    /// Process memory; data is lost on restart
    Memory,
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "IDEABOARD_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Storage backend
    #[arg(long, env = "IDEABOARD_STORE", value_enum, default_value = "postgres")]
    pub store: StoreKind,

    /// Database URL (required for the postgres store)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "IDEABOARD_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Do not create the ideas table on startup
    #[arg(long)]
    pub skip_migrations: bool,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

impl ServeArgs {
    /// Resolve the store configuration, requiring a URL for postgres.
    pub fn store_config(&self) -> Result<StoreConfig> {
        match self.store {
            StoreKind::Memory => Ok(StoreConfig::Memory),
            StoreKind::Postgres => {
                let database_url = self.database_url.clone().context(
                    "DATABASE_URL not set. Set via --database-url, DATABASE_URL env or .env, \
                     or use --store memory",
                )?;
                Ok(StoreConfig::Postgres {
                    database_url,
                    max_connections: self.max_connections,
                    run_migrations: !self.skip_migrations,
                })
            }
        }
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store_config = args.store_config()?;
    tracing::info!(store = ?args.store, "Starting ideaboard server on {}", args.bind);

    let store = open_store(&store_config)
        .await
        .context("Failed to open idea store")?;

    // Blocks until shutdown
    run_server(store, args.server_config())
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(store: StoreKind, database_url: Option<&str>) -> ServeArgs {
        ServeArgs {
            bind: "127.0.0.1:8080".parse().unwrap(),
            store,
            database_url: database_url.map(str::to_owned),
            max_connections: 7,
            skip_migrations: false,
            cors_permissive: false,
        }
    }

    #[test]
    fn memory_needs_no_database() {
        let config = args(StoreKind::Memory, None).store_config().unwrap();
        assert_eq!(config, StoreConfig::Memory);
    }

    #[test]
    fn postgres_requires_url() {
        let err = args(StoreKind::Postgres, None).store_config().unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn postgres_carries_pool_settings() {
        let mut serve = args(StoreKind::Postgres, Some("postgres://localhost/ideas"));
        serve.skip_migrations = true;

        assert_eq!(
            serve.store_config().unwrap(),
            StoreConfig::Postgres {
                database_url: "postgres://localhost/ideas".into(),
                max_connections: 7,
                run_migrations: false,
            }
        );
    }

    #[test]
    fn server_config_from_flags() {
        let mut serve = args(StoreKind::Memory, None);
        serve.cors_permissive = true;

        let config = serve.server_config();
        assert_eq!(config.bind_addr.port(), 8080);
        assert!(config.cors_permissive);
    }
}
