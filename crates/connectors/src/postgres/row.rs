use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use model::{
    ScanError,
    core::value::Value,
    records::{
        row::ValueRow,
        scan::{ScanTarget, Scannable},
    },
};
use tokio_postgres::{Row, types::FromSql};
use uuid::Uuid;

/// A row returned by the PostgreSQL driver, decoded on scan.
pub struct PgRow(Row);

impl PgRow {
    pub fn new(row: Row) -> Self {
        PgRow(row)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decodes every column by its declared type.
    pub fn decode(&self) -> Result<ValueRow, ScanError> {
        (0..self.0.len())
            .map(|column| self.decode_column(column))
            .collect::<Result<Vec<_>, _>>()
            .map(ValueRow::new)
    }

    fn decode_column(&self, column: usize) -> Result<Value, ScanError> {
        let type_name = self.0.columns()[column].type_().name();
        let value = match type_name {
            "bool" => self.get::<bool>(column).map(|v| v.map(Value::Boolean)),
            "int2" => self.get::<i16>(column).map(|v| v.map(Value::SmallInt)),
            "int4" => self.get::<i32>(column).map(|v| v.map(Value::Int32)),
            "int8" => self.get::<i64>(column).map(|v| v.map(Value::Int)),
            "float4" => self
                .get::<f32>(column)
                .map(|v| v.map(|f| Value::Float(f as f64))),
            "float8" => self.get::<f64>(column).map(|v| v.map(Value::Float)),
            "text" | "varchar" | "bpchar" | "name" | "citext" => {
                self.get::<String>(column).map(|v| v.map(Value::String))
            }
            "bytea" => self.get::<Vec<u8>>(column).map(|v| v.map(Value::Bytes)),
            "json" | "jsonb" => self
                .get::<serde_json::Value>(column)
                .map(|v| v.map(Value::Json)),
            "uuid" => self.get::<Uuid>(column).map(|v| v.map(Value::Uuid)),
            "date" => self.get::<NaiveDate>(column).map(|v| v.map(Value::Date)),
            "timestamptz" => self
                .get::<DateTime<Utc>>(column)
                .map(|v| v.map(Value::Timestamp)),
            "timestamp" => self
                .get::<NaiveDateTime>(column)
                .map(|v| v.map(|ts| Value::Timestamp(ts.and_utc()))),
            other => Err(ScanError::Decode {
                column,
                message: format!("unsupported column type {other}"),
            }),
        }?;
        Ok(value.unwrap_or(Value::Null))
    }

    fn get<'a, T: FromSql<'a>>(&'a self, column: usize) -> Result<Option<T>, ScanError> {
        self.0
            .try_get::<_, Option<T>>(column)
            .map_err(|e| ScanError::Decode {
                column,
                message: e.to_string(),
            })
    }
}

impl Scannable for PgRow {
    fn scan(self, targets: &mut [&mut dyn ScanTarget]) -> Result<(), ScanError> {
        if self.len() != targets.len() {
            return Err(ScanError::ColumnCount {
                columns: self.len(),
                targets: targets.len(),
            });
        }
        self.decode()?.scan(targets)
    }
}
