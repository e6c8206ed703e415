//! Process-wide cache of reflected schemas, keyed by record type.

use crate::{
    errors::SchemaError,
    records::record::Record,
    schema::{field::Schema, reflect::reflect_record},
};
use lazy_static::lazy_static;
use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};
use tracing::trace;

lazy_static! {
    static ref SCHEMAS: RwLock<HashMap<TypeId, Arc<Schema>>> = RwLock::new(HashMap::new());
}

/// Returns the schema of `R`, reflecting it on first use. Failed reflections
/// are not cached.
pub fn schema_of<R: Record>() -> Result<Arc<Schema>, SchemaError> {
    let key = TypeId::of::<R>();

    if let Some(schema) = SCHEMAS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
    {
        trace!(record = schema.record(), "schema cache hit");
        return Ok(Arc::clone(schema));
    }

    let schema = Arc::new(reflect_record::<R>()?);
    trace!(record = schema.record(), "schema cache miss");

    let mut schemas = SCHEMAS.write().unwrap_or_else(PoisonError::into_inner);
    Ok(Arc::clone(schemas.entry(key).or_insert(schema)))
}
