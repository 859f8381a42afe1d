#![cfg(test)]
use std::path::{Path, PathBuf};

use configs::DatabaseConfig;
use migration::MigratorTrait;
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;

/// Fresh in-memory database with the schema applied. Each call gets its own
/// database, so tests never see each other's rows.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let mut cfg = DatabaseConfig { url: configs::DEFAULT_DATABASE_URL.to_string(), ..Default::default() };
    cfg.normalize_from_env();
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Migrated database in a fresh temp file, pooled over `max_connections`.
/// The caller removes the file with [`remove_db_file`].
pub async fn get_file_db(max_connections: u32) -> Result<(DatabaseConnection, PathBuf), anyhow::Error> {
    let path = std::env::temp_dir().join(format!("rides-{}.db", uuid::Uuid::new_v4()));
    let cfg = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", path.display()),
        max_connections,
        ..Default::default()
    };
    cfg.validate()?;
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok((db, path))
}

pub fn remove_db_file(path: &Path) {
    for suffix in ["", "-wal", "-shm", "-journal"] {
        let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
    }
}
