//! Idea persistence
//!
//! One contract, two backends:
//! - `MemoryIdeaStore`: ordered `Vec` in process memory, newest first
//! - `PgIdeaStore`: PostgreSQL via a shared sqlx pool, one statement per call
//!
//! Handlers only ever see `StoreError`; backend-specific error shapes are
//! classified inside the backend.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Idea, IdeaDraft};

pub use memory::MemoryIdeaStore;
pub use postgres::{classify_sqlx_error, PgIdeaStore};

/// Store error taxonomy
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write
    #[error("idea already exists")]
    DuplicateKey,

    /// No idea with this id
    #[error("idea '{id}' not found")]
    NotFound { id: Uuid },

    /// Any other persistence failure (connection, query, decode)
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// CRUD over idea records.
///
/// `list` returns newest first. `update` replaces title and description and
/// never touches `id` or `created_at`.
#[async_trait]
pub trait IdeaStore: Send + Sync {
    async fn create(&self, draft: IdeaDraft) -> Result<Idea, StoreError>;

    async fn list(&self) -> Result<Vec<Idea>, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Idea, StoreError>;

    async fn update(&self, id: Uuid, draft: IdeaDraft) -> Result<Idea, StoreError>;

    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    /// Short backend name for logs and the health endpoint.
    fn backend(&self) -> &'static str;
}
