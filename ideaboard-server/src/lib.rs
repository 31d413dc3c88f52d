//! ideaboard-server: HTTP/JSON service for idea records
//!
//! Ideas (title, description, creation time) are created, listed, fetched,
//! replaced and deleted through `/api/ideas`. Storage is pluggable behind
//! [`store::IdeaStore`]: PostgreSQL for durable deployments, process memory
//! for local use and tests.

pub mod db;
pub mod http;
pub mod models;
pub mod store;

use std::sync::Arc;

pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use store::{IdeaStore, MemoryIdeaStore, PgIdeaStore, StoreError};

/// Which backend to serve ideas from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// Process memory; lost on restart
    Memory,
    /// PostgreSQL via a connection pool
    Postgres {
        database_url: String,
        max_connections: u32,
        /// Create the `ideas` table on startup
        run_migrations: bool,
    },
}

/// Open the configured store.
///
/// For PostgreSQL this connects the pool and, unless disabled, creates the
/// schema before any request is served.
pub async fn open_store(config: &StoreConfig) -> Result<Arc<dyn IdeaStore>, sqlx::Error> {
    match config {
        StoreConfig::Memory => {
            tracing::warn!("Using in-memory store: ideas are lost on restart");
            Ok(Arc::new(MemoryIdeaStore::new()))
        }
        StoreConfig::Postgres {
            database_url,
            max_connections,
            run_migrations,
        } => {
            let pool = db::create_pool_with_options(database_url, *max_connections).await?;
            if *run_migrations {
                db::migrations::run(&pool).await?;
            }
            Ok(Arc::new(PgIdeaStore::new(pool)))
        }
    }
}
