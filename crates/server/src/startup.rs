use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use service::gateway::SeaOrmGateway;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the configured database and bring its schema up to date.
pub async fn prepare_database(cfg: &configs::DatabaseConfig) -> Result<DatabaseConnection, StartupError> {
    common::env::ensure_env(&cfg.url).await?;
    let db = models::db::connect_with_config(cfg).await?;
    models::db::test_connection(&db)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    Ok(db)
}

/// Router wired to the given database, ready to serve.
pub fn build_app(db: DatabaseConnection, cfg: &AppConfig) -> Router {
    let state = AppState::new(SeaOrmGateway::new(db), cfg.server.status_policy);
    routes::build_router(state, build_cors())
}

/// Public entry: prepare storage for an already loaded configuration and run
/// the HTTP server. Logging is expected to be initialised by the caller.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let db = prepare_database(&cfg.database).await?;
    let app = build_app(db, &cfg);

    let addr: SocketAddr = cfg
        .server
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))?;
    info!(%addr, status_policy = ?cfg.server.status_policy, "starting ride bookings server");
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(anyhow::Error::from)?;
    axum::serve(listener, app).await.map_err(anyhow::Error::from)?;
    Ok(())
}
