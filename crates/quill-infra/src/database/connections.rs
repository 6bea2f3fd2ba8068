use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, EntityTrait, Schema,
};

/// Configuration for the document database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
    pub const IDLE_TIMEOUT: Duration = Duration::from_secs(300);
}

/// Open the connection pool.
#[cfg(feature = "postgres")]
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    tracing::info!("Initializing database connection...");

    let opts = ConnectOptions::new(&config.url)
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(DatabaseConfig::CONNECT_TIMEOUT)
        .idle_timeout(DatabaseConfig::IDLE_TIMEOUT)
        .sqlx_logging(true)
        .to_owned();

    let conn = Database::connect(opts).await?;
    tracing::info!("Database connected (pool: {})", config.max_connections);

    Ok(conn)
}

/// Create the `users` and `posts` tables when they do not exist yet.
#[cfg(feature = "postgres")]
pub async fn ensure_schema(db: &DbConn) -> Result<(), DbErr> {
    use super::entity::{post, user};

    create_table(db, user::Entity).await?;
    create_table(db, post::Entity).await?;
    Ok(())
}

#[cfg(feature = "postgres")]
async fn create_table<E: EntityTrait>(db: &DbConn, entity: E) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;

    tracing::debug!(table = entity.table_name(), "Table ready");
    Ok(())
}
