//! Scan destinations and the row abstraction that fills them.

use crate::{
    core::value::Value,
    errors::{AssignError, ScanError},
};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// An addressable destination for one result column.
pub trait ScanTarget: Send {
    fn assign(&mut self, value: Value) -> Result<(), AssignError>;
}

/// A result row that can write its columns into bound targets.
pub trait Scannable {
    /// Fails without touching any target when the arity differs.
    fn scan(self, targets: &mut [&mut dyn ScanTarget]) -> Result<(), ScanError>;
}

macro_rules! scan_target {
    ($ty:ty, $name:literal { $($pat:pat => $conv:expr),+ $(,)? }) => {
        impl ScanTarget for $ty {
            fn assign(&mut self, value: Value) -> Result<(), AssignError> {
                *self = match value {
                    $($pat => $conv,)+
                    Value::Null => {
                        return Err(AssignError::UnexpectedNull { expected: $name })
                    }
                    other => {
                        return Err(AssignError::TypeMismatch {
                            expected: $name,
                            found: other.type_name(),
                        })
                    }
                };
                Ok(())
            }
        }
    };
}

fn narrow<T: TryFrom<i64>>(value: i64, expected: &'static str) -> Result<T, AssignError> {
    T::try_from(value).map_err(|_| AssignError::OutOfRange { expected, value })
}

scan_target!(bool, "bool" { Value::Boolean(v) => v });
scan_target!(i16, "i16" {
    Value::SmallInt(v) => v,
    Value::Int32(v) => narrow(v as i64, "i16")?,
    Value::Int(v) => narrow(v, "i16")?,
});
scan_target!(i32, "i32" {
    Value::SmallInt(v) => v as i32,
    Value::Int32(v) => v,
    Value::Int(v) => narrow(v, "i32")?,
});
scan_target!(i64, "i64" {
    Value::SmallInt(v) => v as i64,
    Value::Int32(v) => v as i64,
    Value::Int(v) => v,
});
scan_target!(f32, "f32" { Value::Float(v) => v as f32 });
scan_target!(f64, "f64" { Value::Float(v) => v });
scan_target!(String, "String" { Value::String(v) => v });
scan_target!(Vec<u8>, "Vec<u8>" { Value::Bytes(v) => v });
scan_target!(Uuid, "Uuid" { Value::Uuid(v) => v });
scan_target!(NaiveDate, "NaiveDate" { Value::Date(v) => v });
scan_target!(DateTime<Utc>, "DateTime<Utc>" { Value::Timestamp(v) => v });

impl ScanTarget for serde_json::Value {
    fn assign(&mut self, value: Value) -> Result<(), AssignError> {
        *self = match value {
            Value::Json(v) => v,
            Value::Null => serde_json::Value::Null,
            other => {
                return Err(AssignError::TypeMismatch {
                    expected: "serde_json::Value",
                    found: other.type_name(),
                });
            }
        };
        Ok(())
    }
}

impl<T: ScanTarget + Default> ScanTarget for Option<T> {
    fn assign(&mut self, value: Value) -> Result<(), AssignError> {
        if value.is_null() {
            *self = None;
            return Ok(());
        }

        let mut inner = T::default();
        inner.assign(value)?;
        *self = Some(inner);
        Ok(())
    }
}

/// Writes `values` positionally into `targets`.
pub fn scan_values(values: Vec<Value>, targets: &mut [&mut dyn ScanTarget]) -> Result<(), ScanError> {
    if values.len() != targets.len() {
        return Err(ScanError::ColumnCount {
            columns: values.len(),
            targets: targets.len(),
        });
    }

    for (column, (value, target)) in values.into_iter().zip(targets.iter_mut()).enumerate() {
        target
            .assign(value)
            .map_err(|source| ScanError::Assign { column, source })?;
    }
    Ok(())
}
