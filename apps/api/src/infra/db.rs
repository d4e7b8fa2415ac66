use std::time::Duration;

use migration::migrate_up;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::is_sqlite_memory;
use crate::error::AppError;

/// Open a connection pool for `database_url`. Does NOT run migrations.
///
/// An in-memory SQLite database lives only as long as its connection, so that
/// case is pinned to a single, never-recycled connection.
pub async fn connect_db(database_url: &str) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(database_url.to_string());
    opt.acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    if is_sqlite_memory(database_url) {
        opt.min_connections(1)
            .max_connections(1)
            .idle_timeout(Duration::from_secs(u32::MAX as u64))
            .max_lifetime(Duration::from_secs(u32::MAX as u64));
    }

    let conn = Database::connect(opt).await?;
    info!(backend = ?conn.get_database_backend(), "db.connected");
    Ok(conn)
}

/// Single entrypoint used at startup: connect, then apply pending migrations.
pub async fn bootstrap_db(database_url: &str) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(database_url).await?;
    migrate_up(&conn).await?;
    Ok(conn)
}
