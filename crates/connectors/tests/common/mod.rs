#![allow(dead_code)]

use async_trait::async_trait;
use connectors::{
    QueryError,
    querier::{Querier, RowCursor, RowQuerier},
};
use model::{
    core::value::Value,
    records::{
        record::{FieldRef, Fields, Record},
        row::ValueRow,
    },
    schema::describe::{FieldDef, RecordType},
};
use std::{
    collections::VecDeque,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Person {
    pub id: i64,
    pub name: String,
}

impl Fields for Person {
    fn fields_mut(&mut self) -> Vec<FieldRef<'_>> {
        vec![FieldRef::scalar(&mut self.id), FieldRef::scalar(&mut self.name)]
    }
}

impl Record for Person {
    fn describe() -> RecordType {
        RecordType::new("Person")
            .field(FieldDef::scalar("ID").column("id"))
            .field(FieldDef::scalar("Name").column("name"))
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Friends {
    pub id: i64,
    pub person_a: Person,
    pub person_b: Person,
}

impl Fields for Friends {
    fn fields_mut(&mut self) -> Vec<FieldRef<'_>> {
        vec![
            FieldRef::scalar(&mut self.id),
            FieldRef::record(&mut self.person_a),
            FieldRef::record(&mut self.person_b),
        ]
    }
}

impl Record for Friends {
    fn describe() -> RecordType {
        RecordType::new("Friends")
            .field(FieldDef::scalar("ID").column("id"))
            .field(FieldDef::record::<Person>("PersonA").foreign("people,id,person_a_id"))
            .field(FieldDef::record::<Person>("PersonB").foreign("people,id,person_b_id"))
    }
}

/// A record whose only relation tag is malformed.
#[derive(Debug, Default)]
pub struct Broken {
    pub owner: Person,
}

impl Fields for Broken {
    fn fields_mut(&mut self) -> Vec<FieldRef<'_>> {
        vec![FieldRef::record(&mut self.owner)]
    }
}

impl Record for Broken {
    fn describe() -> RecordType {
        RecordType::new("Broken")
            .field(FieldDef::record::<Person>("Owner").foreign("people,id"))
    }
}

pub fn person_row(id: i64, name: &str) -> ValueRow {
    ValueRow::new(vec![Value::Int(id), Value::from(name)])
}

/// Serves canned rows and records every statement it receives.
#[derive(Default)]
pub struct MemoryQuerier {
    rows: Vec<ValueRow>,
    fail_query: bool,
    fail_at: Option<usize>,
    stall_at: Option<usize>,
    closed: Arc<AtomicUsize>,
    statements: Mutex<Vec<(String, Vec<Value>)>>,
}

impl MemoryQuerier {
    pub fn with_rows(rows: Vec<ValueRow>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    /// Every query fails before producing a result.
    pub fn failing() -> Self {
        Self {
            fail_query: true,
            ..Default::default()
        }
    }

    /// The cursor reports an error instead of the row at `index`.
    pub fn fail_at(mut self, index: usize) -> Self {
        self.fail_at = Some(index);
        self
    }

    /// The cursor never produces the row at `index`.
    pub fn stall_at(mut self, index: usize) -> Self {
        self.stall_at = Some(index);
        self
    }

    pub fn closed_cursors(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn statements(&self) -> Vec<(String, Vec<Value>)> {
        self.statements.lock().unwrap().clone()
    }

    fn record(&self, sql: &str, args: &[Value]) -> Result<(), QueryError> {
        self.statements
            .lock()
            .unwrap()
            .push((sql.to_string(), args.to_vec()));
        if self.fail_query {
            return Err(QueryError::driver("connection reset by peer"));
        }
        Ok(())
    }
}

#[async_trait]
impl RowQuerier for MemoryQuerier {
    type Row = ValueRow;

    async fn query_row(&self, sql: &str, args: &[Value]) -> Result<Option<ValueRow>, QueryError> {
        self.record(sql, args)?;
        Ok(self.rows.first().cloned())
    }
}

#[async_trait]
impl Querier for MemoryQuerier {
    type Cursor = MemoryCursor;

    async fn query(&self, sql: &str, args: &[Value]) -> Result<MemoryCursor, QueryError> {
        self.record(sql, args)?;
        Ok(MemoryCursor {
            rows: self.rows.iter().cloned().collect(),
            position: 0,
            fail_at: self.fail_at,
            stall_at: self.stall_at,
            open: true,
            closed: Arc::clone(&self.closed),
        })
    }
}

pub struct MemoryCursor {
    rows: VecDeque<ValueRow>,
    position: usize,
    fail_at: Option<usize>,
    stall_at: Option<usize>,
    open: bool,
    closed: Arc<AtomicUsize>,
}

#[async_trait]
impl RowCursor for MemoryCursor {
    type Row = ValueRow;

    async fn next(&mut self) -> Result<Option<ValueRow>, QueryError> {
        if self.fail_at == Some(self.position) {
            return Err(QueryError::driver("cursor interrupted"));
        }
        if self.stall_at == Some(self.position) {
            std::future::pending::<()>().await;
        }
        self.position += 1;
        Ok(self.rows.pop_front())
    }

    fn close(&mut self) {
        if self.open {
            self.open = false;
            self.closed.fetch_add(1, Ordering::SeqCst);
        }
    }
}
