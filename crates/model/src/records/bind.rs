//! Builds the positional scan target list of a record instance.
//!
//! The walk mirrors the projection walk of the statement generator: fields
//! in declaration order, omitted fields skipped, relations flattened
//! depth-first. `bind(..).len()` therefore always equals the projected
//! column count of the same schema.

use crate::{
    errors::SchemaError,
    records::{
        record::{FieldRef, Fields},
        scan::ScanTarget,
    },
    schema::field::{FieldDescriptor, Schema},
};

pub fn bind<'a>(
    schema: &Schema,
    instance: &'a mut dyn Fields,
) -> Result<Vec<&'a mut dyn ScanTarget>, SchemaError> {
    let mut targets = Vec::with_capacity(schema.column_count());
    bind_fields(schema.record(), schema.fields(), instance, &mut targets)?;
    Ok(targets)
}

fn bind_fields<'a>(
    record: &str,
    descriptors: &[FieldDescriptor],
    instance: &'a mut dyn Fields,
    targets: &mut Vec<&'a mut dyn ScanTarget>,
) -> Result<(), SchemaError> {
    let fields = instance.fields_mut();
    if fields.len() != descriptors.len() {
        return Err(SchemaError::FieldCount {
            record: record.to_string(),
            expected: descriptors.len(),
            found: fields.len(),
        });
    }

    for (descriptor, field) in descriptors.iter().zip(fields) {
        if descriptor.omitted {
            continue;
        }

        match (&descriptor.foreign, field) {
            (None, FieldRef::Scalar(target)) => targets.push(target),
            (Some(foreign), FieldRef::Record(nested)) => {
                bind_fields(&descriptor.field, &foreign.fields, nested, targets)?
            }
            (foreign, field) => {
                return Err(SchemaError::FieldShape {
                    field: descriptor.field.clone(),
                    expected: if foreign.is_some() { "a record" } else { "a scalar" },
                    found: field.shape(),
                });
            }
        }
    }
    Ok(())
}
