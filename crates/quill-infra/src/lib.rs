//! # Quill Infrastructure
//!
//! Concrete implementations of the repository ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external database, in-memory store only
//! - `postgres` - PostgreSQL document storage via SeaORM

pub mod database;

// Re-exports - In-Memory
pub use database::{DatabaseConfig, InMemoryPostRepository, InMemoryUserRepository};

// Re-exports - PostgreSQL
#[cfg(feature = "postgres")]
pub use database::{PostgresPostRepository, PostgresUserRepository};
