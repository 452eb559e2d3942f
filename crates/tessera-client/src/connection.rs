//! The single database connection owned by a client.
//!
//! Connections go through sqlx's `Any` driver, so result values are limited
//! to what it can carry: integers, floats, booleans, text and blobs. Cast
//! other column types to text in SQL when reading them back.

use async_trait::async_trait;
use futures::TryStreamExt;
use serde_json::Value;
use sqlx::any::AnyRow;
use sqlx::{AnyConnection, Column, Connection, Either, Row as _};
use tessera_core::{ClientError, Query, QueryHandler, QueryOutput, Row};
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Default)]
pub struct ConnectionHandle {
    conn: Mutex<Option<AnyConnection>>,
}

impl ConnectionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the connection, replacing any previous one.
    pub async fn connect(&self, url: &str) -> Result<(), ClientError> {
        sqlx::any::install_default_drivers();
        let conn = AnyConnection::connect(url)
            .await
            .map_err(|e| ClientError::Connection(e.to_string()))?;

        let previous = self.conn.lock().await.replace(conn);
        if let Some(previous) = previous {
            let _ = previous.close().await;
        }
        Ok(())
    }

    pub async fn is_connected(&self) -> bool {
        self.conn.lock().await.is_some()
    }

    /// Close the connection if one is open. Calling it again is a no-op.
    pub async fn close(&self) -> Result<(), ClientError> {
        let conn = self.conn.lock().await.take();
        match conn {
            Some(conn) => conn
                .close()
                .await
                .map_err(|e| ClientError::Connection(e.to_string())),
            None => Ok(()),
        }
    }

    /// Run one SQL string, which may itself hold several statements.
    pub async fn execute(&self, sql: &str) -> Result<QueryOutput, ClientError> {
        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or(ClientError::NotPrepared)?;

        debug!(sql, "executing statement");
        let mut output = QueryOutput::default();
        let mut stream = sqlx::raw_sql(sql).fetch_many(&mut *conn);
        while let Some(item) = stream
            .try_next()
            .await
            .map_err(|e| ClientError::Query(e.to_string()))?
        {
            match item {
                Either::Left(result) => output.rows_affected += result.rows_affected(),
                Either::Right(row) => output.rows.push(decode_row(&row)?),
            }
        }
        Ok(output)
    }
}

#[async_trait]
impl QueryHandler for ConnectionHandle {
    async fn query(&self, query: &Query) -> Result<QueryOutput, ClientError> {
        let mut output = QueryOutput::default();
        for statement in query.statements() {
            output.extend(self.execute(statement).await?);
        }
        Ok(output)
    }
}

fn decode_row(row: &AnyRow) -> Result<Row, ClientError> {
    row.columns()
        .iter()
        .map(|column| {
            let value = decode_value(row, column.ordinal())?;
            Ok((column.name().to_string(), value))
        })
        .collect::<Result<Vec<_>, ClientError>>()
        .map(Row::new)
}

fn decode_value(row: &AnyRow, index: usize) -> Result<Value, ClientError> {
    if let Ok(v) = row.try_get::<Option<i64>, _>(index) {
        return Ok(v.map_or(Value::Null, Value::from));
    }
    if let Ok(v) = row.try_get::<Option<f64>, _>(index) {
        return Ok(v.map_or(Value::Null, Value::from));
    }
    if let Ok(v) = row.try_get::<Option<bool>, _>(index) {
        return Ok(v.map_or(Value::Null, Value::from));
    }
    if let Ok(v) = row.try_get::<Option<String>, _>(index) {
        return Ok(v.map_or(Value::Null, Value::from));
    }
    row.try_get::<Option<Vec<u8>>, _>(index)
        .map(|v| v.map_or(Value::Null, Value::from))
        .map_err(|e| ClientError::Query(format!("cannot decode column {index}: {e}")))
}
