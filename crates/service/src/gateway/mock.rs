//! Test doubles for [`PersistenceGateway`].

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use sea_orm::{DbErr, FromQueryResult, Value};

use super::{ExecContext, GatewayError, PersistenceGateway};

fn refused(op: &str) -> GatewayError {
    GatewayError::Driver(DbErr::Custom(format!("{op} refused by test gateway")))
}

/// Gateway whose every call fails. Counts calls so tests can prove a path
/// never reached storage.
#[derive(Default)]
pub struct FailingGateway {
    calls: AtomicUsize,
}

impl FailingGateway {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PersistenceGateway for FailingGateway {
    async fn query<T>(&self, _sql: &str, _params: Vec<Value>) -> Result<Vec<T>, GatewayError>
    where
        T: FromQueryResult + Send + 'static,
    {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(refused("query"))
    }

    async fn execute(&self, _sql: &str, _params: Vec<Value>) -> Result<ExecContext, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(refused("execute"))
    }
}

/// Delegates `execute` to the wrapped gateway and fails every `query`.
pub struct FailOnQuery<G> {
    inner: G,
    executes: AtomicUsize,
}

impl<G: PersistenceGateway> FailOnQuery<G> {
    pub fn new(inner: G) -> Self {
        Self { inner, executes: AtomicUsize::new(0) }
    }

    pub fn executes(&self) -> usize {
        self.executes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<G: PersistenceGateway> PersistenceGateway for FailOnQuery<G> {
    async fn query<T>(&self, _sql: &str, _params: Vec<Value>) -> Result<Vec<T>, GatewayError>
    where
        T: FromQueryResult + Send + 'static,
    {
        Err(refused("query"))
    }

    async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<ExecContext, GatewayError> {
        self.executes.fetch_add(1, Ordering::SeqCst);
        self.inner.execute(sql, params).await
    }
}
