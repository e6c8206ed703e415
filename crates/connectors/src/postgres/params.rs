use model::core::value::Value;
use tokio_postgres::types::{Json, ToSql};

/// A forwarded argument boxed as a driver parameter.
pub struct PgParam(Box<dyn ToSql + Sync + Send>);

impl From<Value> for PgParam {
    fn from(value: Value) -> Self {
        match value {
            Value::SmallInt(v) => PgParam(Box::new(v)),
            Value::Int32(v) => PgParam(Box::new(v)),
            Value::Int(v) => PgParam(Box::new(v)),
            Value::Float(v) => PgParam(Box::new(v)),
            Value::String(v) => PgParam(Box::new(v)),
            Value::Boolean(v) => PgParam(Box::new(v)),
            Value::Json(v) => PgParam(Box::new(Json(v))),
            Value::Uuid(v) => PgParam(Box::new(v)),
            Value::Bytes(v) => PgParam(Box::new(v)),
            Value::Date(v) => PgParam(Box::new(v)),
            Value::Timestamp(v) => PgParam(Box::new(v)),
            Value::Null => PgParam(Box::new(Option::<String>::None)),
        }
    }
}

impl AsRef<dyn ToSql + Sync> for PgParam {
    fn as_ref(&self) -> &(dyn ToSql + Sync + 'static) {
        &*self.0
    }
}

/// Owns the parameters of one statement for the duration of the call.
pub struct PgParamStore {
    params: Vec<PgParam>,
}

impl PgParamStore {
    pub fn new(values: &[Value]) -> Self {
        Self {
            params: values.iter().cloned().map(PgParam::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn as_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.iter().map(AsRef::as_ref).collect()
    }
}
