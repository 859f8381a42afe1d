use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, FromQueryResult, Statement, Value};
use tracing::{debug, instrument};

use super::{ExecContext, GatewayError, PersistenceGateway};

/// Gateway over a sea-orm connection. Owns the handle; callers only ever see
/// the gateway.
#[derive(Clone)]
pub struct SeaOrmGateway {
    db: DatabaseConnection,
}

impl SeaOrmGateway {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn statement(&self, sql: &str, params: Vec<Value>) -> Statement {
        Statement::from_sql_and_values(self.db.get_database_backend(), sql, params)
    }
}

#[async_trait]
impl PersistenceGateway for SeaOrmGateway {
    #[instrument(level = "debug", skip(self, params), fields(params = params.len()))]
    async fn query<T>(&self, sql: &str, params: Vec<Value>) -> Result<Vec<T>, GatewayError>
    where
        T: FromQueryResult + Send + 'static,
    {
        let rows = T::find_by_statement(self.statement(sql, params))
            .all(&self.db)
            .await?;
        debug!(rows = rows.len(), "query completed");
        Ok(rows)
    }

    #[instrument(level = "debug", skip(self, params), fields(params = params.len()))]
    async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<ExecContext, GatewayError> {
        let res = self.db.execute(self.statement(sql, params)).await?;
        let raw_id = res.last_insert_id();
        let last_insert_id = i64::try_from(raw_id).map_err(|_| GatewayError::IdOutOfRange(raw_id))?;
        let ctx = ExecContext { last_insert_id, rows_affected: res.rows_affected() };
        debug!(last_insert_id = ctx.last_insert_id, rows_affected = ctx.rows_affected, "statement executed");
        Ok(ctx)
    }
}
