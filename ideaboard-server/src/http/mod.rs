//! HTTP server layer
//!
//! Axum server with:
//! - `/api/ideas` CRUD routes over an injected `IdeaStore`
//! - CORS (localhost only by default)
//! - Request tracing
//! - JSON content type on every response
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::{ApiError, IdeaOp};
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
