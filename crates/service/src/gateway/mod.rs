//! Persistence gateway: the storage driver's two primitives as awaitable calls.
//!
//! `execute` runs a mutating statement and hands back the [`ExecContext`] the
//! driver produced for it (generated row id, affected rows). `query` runs a
//! read statement and decodes every returned row. Parameters are always bound,
//! never spliced into the SQL text.

use async_trait::async_trait;
use sea_orm::{DbErr, FromQueryResult, Value};
use thiserror::Error;

pub mod mock;
pub mod seaorm;

pub use seaorm::SeaOrmGateway;

/// Context the driver attaches to a completed mutating statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecContext {
    /// Row id generated by the statement (SQLite `last_insert_rowid`).
    pub last_insert_id: i64,
    pub rows_affected: u64,
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("driver error: {0}")]
    Driver(#[from] DbErr),
    #[error("generated id {0} does not fit in a signed 64-bit integer")]
    IdOutOfRange(u64),
}

#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Run a read statement; rows come back in the order the engine produced them.
    async fn query<T>(&self, sql: &str, params: Vec<Value>) -> Result<Vec<T>, GatewayError>
    where
        T: FromQueryResult + Send + 'static;

    /// Run a mutating statement and forward the driver's execution context.
    async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<ExecContext, GatewayError>;
}
