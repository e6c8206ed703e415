//! The query capability consumed by the executor.
//!
//! Drivers implement these traits; the executor only ever sees SQL text,
//! positional `Value` parameters and rows that know how to scan themselves.

use crate::error::QueryError;
use async_trait::async_trait;
use model::{core::value::Value, records::scan::Scannable};
use std::ops::{Deref, DerefMut};
use tracing::warn;

/// Runs a query expected to produce at most one row of interest.
#[async_trait]
pub trait RowQuerier: Send + Sync {
    type Row: Scannable + Send;

    /// `Ok(None)` when the query matched no rows.
    async fn query_row(&self, sql: &str, args: &[Value]) -> Result<Option<Self::Row>, QueryError>;
}

/// Runs a query and exposes its rows through a cursor.
#[async_trait]
pub trait Querier: Send + Sync {
    type Cursor: RowCursor;

    async fn query(&self, sql: &str, args: &[Value]) -> Result<Self::Cursor, QueryError>;
}

/// An open result set.
#[async_trait]
pub trait RowCursor: Send {
    type Row: Scannable + Send;

    /// `Ok(None)` once the result set is exhausted.
    async fn next(&mut self) -> Result<Option<Self::Row>, QueryError>;

    /// Releases the cursor. Must be safe to call more than once.
    fn close(&mut self);
}

/// Closes the wrapped cursor when dropped, whichever way the owning scope is
/// left.
pub struct CursorGuard<C: RowCursor> {
    cursor: C,
    exhausted: bool,
}

impl<C: RowCursor> CursorGuard<C> {
    pub fn new(cursor: C) -> Self {
        Self {
            cursor,
            exhausted: false,
        }
    }

    /// Marks the cursor as fully consumed; dropping it is then routine.
    pub fn finish(mut self) {
        self.exhausted = true;
    }
}

impl<C: RowCursor> Deref for CursorGuard<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.cursor
    }
}

impl<C: RowCursor> DerefMut for CursorGuard<C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.cursor
    }
}

impl<C: RowCursor> Drop for CursorGuard<C> {
    fn drop(&mut self) {
        if !self.exhausted {
            warn!("releasing cursor before the result set was exhausted");
        }
        self.cursor.close();
    }
}
