use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

pub mod clause;
pub mod repositories;

pub use repositories::movie::MovieRepository;
pub use repositories::ratings::RatingsRepository;

/// Failure of query execution against a backing store (malformed predicate,
/// unknown column, connectivity loss). Surfaced to the caller as-is, never
/// retried. Absence of a row is not an error; callers see `None` or an
/// empty page instead.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("query execution failed: {0}")]
    Execution(#[from] DbErr),
}

pub async fn connect(db_url: &str) -> Result<DatabaseConnection, DbErr> {
    connect_with_pool_options(db_url, 5, 1).await
}

pub async fn connect_with_pool_options(
    db_url: &str,
    max_connections: u32,
    min_connections: u32,
) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(db_url.to_string());
    opt.max_connections(max_connections)
        .min_connections(min_connections)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(600))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await?;

    info!(
        "Database connected: {} (pool: {}-{})",
        db_url, min_connections, max_connections
    );

    Ok(conn)
}

pub async fn ping(conn: &DatabaseConnection) -> Result<(), QueryError> {
    let backend = conn.get_database_backend();
    conn.query_one(Statement::from_string(backend, "SELECT 1".to_string()))
        .await?;
    Ok(())
}
