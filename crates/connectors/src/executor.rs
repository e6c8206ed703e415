//! Fetches records: reflect, assemble, query, bind and scan.

use crate::{
    error::FetchError,
    querier::{CursorGuard, Querier, RowCursor, RowQuerier},
};
use model::{
    core::value::Value,
    records::{bind::bind, record::Record, scan::Scannable},
    schema::cache::schema_of,
};
use planner::query::{
    dialect::{Dialect, Postgres},
    generator::QueryGenerator,
};
use tracing::{debug, trace};

/// Runs record fetches with SQL generated for one dialect.
pub struct Executor<'a> {
    generator: QueryGenerator<'a>,
}

impl<'a> Executor<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            generator: QueryGenerator::new(dialect),
        }
    }

    /// Loads the first row matched by the generated query into `destination`.
    ///
    /// The row is scanned into a fresh record which replaces `destination`
    /// only once every column has been assigned; on any error `destination`
    /// is left untouched.
    /// A leading string in `args` is appended verbatim to the statement and
    /// the remaining values are forwarded as parameters.
    pub async fn fetch_one<Q, R>(
        &self,
        querier: &Q,
        destination: &mut R,
        table: &str,
        args: Vec<Value>,
    ) -> Result<(), FetchError>
    where
        Q: RowQuerier + ?Sized,
        R: Record,
    {
        let schema = schema_of::<R>()?;
        let (sql, params) = self.generator.select(&schema, table, args);
        debug!(table, %sql, "fetching one {}", schema.record());

        let mut record = R::default();
        {
            let mut targets = bind(&schema, &mut record)?;
            let row = querier
                .query_row(&sql, &params)
                .await?
                .ok_or(FetchError::NoRows)?;
            row.scan(&mut targets)?;
        }
        *destination = record;

        Ok(())
    }

    /// Appends every row matched by the generated query to `destination`,
    /// in result order.
    ///
    /// On failure the rows scanned so far stay in `destination`. The cursor
    /// is closed on every exit path.
    pub async fn fetch_all<Q, R>(
        &self,
        querier: &Q,
        destination: &mut Vec<R>,
        table: &str,
        args: Vec<Value>,
    ) -> Result<(), FetchError>
    where
        Q: Querier + ?Sized,
        R: Record,
    {
        let schema = schema_of::<R>()?;
        let (sql, params) = self.generator.select(&schema, table, args);
        debug!(table, %sql, "fetching all {}", schema.record());

        let mut cursor = CursorGuard::new(querier.query(&sql, &params).await?);
        let mut fetched = 0usize;
        while let Some(row) = cursor.next().await? {
            let mut record = R::default();
            {
                let mut targets = bind(&schema, &mut record)?;
                row.scan(&mut targets)?;
            }
            destination.push(record);
            fetched += 1;
            trace!(row = fetched, "scanned {}", schema.record());
        }
        cursor.finish();

        debug!(table, rows = fetched, "fetched {}", schema.record());
        Ok(())
    }
}

impl Default for Executor<'static> {
    fn default() -> Self {
        Executor::new(&Postgres)
    }
}

/// [`Executor::fetch_one`] with the PostgreSQL dialect.
pub async fn fetch_one<Q, R>(
    querier: &Q,
    destination: &mut R,
    table: &str,
    args: Vec<Value>,
) -> Result<(), FetchError>
where
    Q: RowQuerier + ?Sized,
    R: Record,
{
    Executor::default()
        .fetch_one(querier, destination, table, args)
        .await
}

/// [`Executor::fetch_all`] with the PostgreSQL dialect.
pub async fn fetch_all<Q, R>(
    querier: &Q,
    destination: &mut Vec<R>,
    table: &str,
    args: Vec<Value>,
) -> Result<(), FetchError>
where
    Q: Querier + ?Sized,
    R: Record,
{
    Executor::default()
        .fetch_all(querier, destination, table, args)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryError;
    use async_trait::async_trait;
    use model::{
        records::{
            record::{FieldRef, Fields},
            row::ValueRow,
        },
        schema::describe::{FieldDef, RecordType},
    };
    use tracing_test::traced_test;

    #[derive(Debug, Default)]
    struct Tag {
        label: String,
    }

    impl Fields for Tag {
        fn fields_mut(&mut self) -> Vec<FieldRef<'_>> {
            vec![FieldRef::scalar(&mut self.label)]
        }
    }

    impl Record for Tag {
        fn describe() -> RecordType {
            RecordType::new("Tag").field(FieldDef::scalar("Label").column("label"))
        }
    }

    struct Rows(Vec<Value>);

    struct Cursor(std::vec::IntoIter<Value>);

    #[async_trait]
    impl Querier for Rows {
        type Cursor = Cursor;

        async fn query(&self, _sql: &str, _args: &[Value]) -> Result<Cursor, QueryError> {
            Ok(Cursor(self.0.clone().into_iter()))
        }
    }

    #[async_trait]
    impl RowCursor for Cursor {
        type Row = ValueRow;

        async fn next(&mut self) -> Result<Option<ValueRow>, QueryError> {
            Ok(self.0.next().map(|value| ValueRow::new(vec![value])))
        }

        fn close(&mut self) {}
    }

    #[tokio::test]
    #[traced_test]
    async fn test_logs_fetch() {
        let querier = Rows(vec![Value::from("red"), Value::from("blue")]);
        let mut tags: Vec<Tag> = Vec::new();

        fetch_all(&querier, &mut tags, "tags", Vec::new()).await.unwrap();

        assert_eq!(tags.len(), 2);
        assert!(logs_contain(r#"SELECT "tags"."label" FROM "tags""#));
        assert!(logs_contain("fetched Tag"));
        assert!(!logs_contain("releasing cursor"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_warns_when_cursor_released_early() {
        let querier = Rows(vec![Value::from("red"), Value::Int(3)]);
        let mut tags: Vec<Tag> = Vec::new();

        let err = fetch_all(&querier, &mut tags, "tags", Vec::new())
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Scan(_)));
        assert_eq!(tags.len(), 1);
        assert!(logs_contain("releasing cursor before the result set was exhausted"));
    }
}
