use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use tracing::info;

use crate::errors::ModelError;

// Recycling the only connection of an in-memory database would wipe it
const MEMORY_CONNECTION_LIFETIME: Duration = Duration::from_secs(60 * 60 * 24 * 365 * 10);

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    if cfg.is_in_memory() {
        opts.idle_timeout(MEMORY_CONNECTION_LIFETIME)
            .max_lifetime(MEMORY_CONNECTION_LIFETIME);
    }
    let db = Database::connect(opts)
        .await
        .map_err(|e| ModelError::Connect(e.to_string()))?;
    info!(max_connections = cfg.max_connections, in_memory = cfg.is_in_memory(), "database connected");
    Ok(db)
}

/// Round-trip a trivial statement to prove the connection is usable.
pub async fn test_connection(db: &DatabaseConnection) -> Result<(), ModelError> {
    db.query_one(Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 AS ok"))
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?
        .ok_or_else(|| ModelError::Db("SELECT 1 returned no row".into()))?;
    Ok(())
}
