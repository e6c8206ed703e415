use super::{config::PgConfig, connect::connect, params::PgParamStore, row::PgRow};
use crate::{
    error::{ConnectorError, QueryError},
    querier::{Querier, RowCursor, RowQuerier},
};
use async_trait::async_trait;
use futures_util::TryStreamExt;
use model::core::value::Value;
use std::{pin::Pin, sync::Arc};
use tokio_postgres::{Client, RowStream, types::ToSql};
use tracing::trace;

/// Query capability backed by a `tokio_postgres` client.
#[derive(Clone)]
pub struct PgQuerier {
    client: Arc<Client>,
}

impl PgQuerier {
    pub fn new(client: Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub async fn connect(config: &PgConfig) -> Result<Self, ConnectorError> {
        Ok(Self::new(connect(config).await?))
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    async fn stream(&self, sql: &str, args: &[Value]) -> Result<RowStream, QueryError> {
        let params = PgParamStore::new(args);
        let refs = params.as_refs();
        trace!(params = refs.len(), "executing statement");
        let stream = self
            .client
            .query_raw(sql, refs.iter().map(|param| *param as &dyn ToSql))
            .await?;
        Ok(stream)
    }
}

#[async_trait]
impl RowQuerier for PgQuerier {
    type Row = PgRow;

    async fn query_row(&self, sql: &str, args: &[Value]) -> Result<Option<PgRow>, QueryError> {
        let mut stream = Box::pin(self.stream(sql, args).await?);
        // Only the first row matters; the rest is discarded with the stream.
        Ok(stream.try_next().await?.map(PgRow::new))
    }
}

#[async_trait]
impl Querier for PgQuerier {
    type Cursor = PgCursor;

    async fn query(&self, sql: &str, args: &[Value]) -> Result<PgCursor, QueryError> {
        let stream = self.stream(sql, args).await?;
        Ok(PgCursor {
            stream: Some(Box::pin(stream)),
        })
    }
}

/// An open `RowStream`. Closing drops the stream.
pub struct PgCursor {
    stream: Option<Pin<Box<RowStream>>>,
}

#[async_trait]
impl RowCursor for PgCursor {
    type Row = PgRow;

    async fn next(&mut self) -> Result<Option<PgRow>, QueryError> {
        let Some(stream) = self.stream.as_mut() else {
            return Ok(None);
        };
        let row = stream.try_next().await?;
        if row.is_none() {
            self.stream = None;
        }
        Ok(row.map(PgRow::new))
    }

    fn close(&mut self) {
        self.stream = None;
    }
}
