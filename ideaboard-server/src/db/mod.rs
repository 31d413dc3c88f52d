//! Database layer - connection pool and schema
//!
//! The pool is shared by every request; there is no application-level
//! locking around it. Consistency comes from PostgreSQL's per-statement
//! guarantees.

pub mod migrations;
pub mod pool;

pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
