//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{PostRepository, UserRepository};
use quill_core::{PostService, UserService};
use quill_infra::database::DatabaseConfig;
use quill_infra::{InMemoryPostRepository, InMemoryUserRepository};

#[cfg(feature = "postgres")]
use quill_infra::{PostgresPostRepository, PostgresUserRepository, database};

/// Repository handles chosen once at startup.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    /// Storage backend name, reported by the health check.
    pub storage: &'static str,
}

impl Repositories {
    /// In-process document store.
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            posts: Arc::new(InMemoryPostRepository::new()),
            storage: "memory",
        }
    }

    /// Connect to PostgreSQL when configured, falling back to the in-memory store.
    #[cfg(feature = "postgres")]
    pub async fn connect(db_config: Option<&DatabaseConfig>) -> Self {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Self::in_memory();
        };

        let conn = match database::connect(config).await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                return Self::in_memory();
            }
        };

        if let Err(e) = database::ensure_schema(&conn).await {
            tracing::error!(
                "Failed to prepare database schema: {}. Using in-memory fallback.",
                e
            );
            return Self::in_memory();
        }

        Self {
            users: Arc::new(PostgresUserRepository::new(conn.clone())),
            posts: Arc::new(PostgresPostRepository::new(conn)),
            storage: "postgres",
        }
    }

    #[cfg(not(feature = "postgres"))]
    pub async fn connect(db_config: Option<&DatabaseConfig>) -> Self {
        if db_config.is_some() {
            tracing::warn!("DATABASE_URL ignored: built without postgres feature");
        }
        tracing::info!("Running without postgres feature - using in-memory repository");
        Self::in_memory()
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub posts: PostService,
    pub storage: &'static str,
}

impl AppState {
    /// Wire the services to their repositories.
    pub fn new(repos: Repositories) -> Self {
        tracing::info!(storage = repos.storage, "Application state initialized");

        Self {
            users: UserService::new(repos.users),
            posts: PostService::new(repos.posts),
            storage: repos.storage,
        }
    }
}
