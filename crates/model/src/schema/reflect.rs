use crate::{
    errors::SchemaError,
    records::record::Record,
    schema::{
        describe::{FieldDef, FieldKind, RecordType},
        field::{FieldDescriptor, ForeignDescriptor, Schema},
    },
};
use std::any::TypeId;
use tracing::trace;

/// Records entered on the way down to the field being reflected. Only
/// entries with a type identity take part in cycle detection.
type Path = Vec<(Option<TypeId>, &'static str)>;

/// Builds the `Schema` of a record description.
pub fn reflect(record: &RecordType) -> Result<Schema, SchemaError> {
    reflect_from(record, vec![(None, record.name)])
}

/// Builds the `Schema` of `R`. A relation leading back to `R` itself is
/// reported as circular.
pub fn reflect_record<R: Record>() -> Result<Schema, SchemaError> {
    let record = R::describe();
    reflect_from(&record, vec![(Some(TypeId::of::<R>()), record.name)])
}

fn reflect_from(record: &RecordType, mut path: Path) -> Result<Schema, SchemaError> {
    let fields = reflect_fields(record, &mut path)?;
    trace!(record = record.name, fields = fields.len(), "reflected schema");
    Ok(Schema::new(record.name, fields))
}

fn reflect_fields(record: &RecordType, path: &mut Path) -> Result<Vec<FieldDescriptor>, SchemaError> {
    record
        .fields
        .iter()
        .map(|field| reflect_field(field, path))
        .collect()
}

fn reflect_field(field: &FieldDef, path: &mut Path) -> Result<FieldDescriptor, SchemaError> {
    let Some(tag) = field.foreign.as_deref().filter(|tag| !tag.is_empty()) else {
        if let FieldKind::Record { .. } = field.kind {
            return Err(SchemaError::RecordWithoutRelation {
                field: field.name.clone(),
            });
        }

        let column = match field.column.as_deref() {
            Some(column) if !column.is_empty() => column,
            _ => field.name.as_str(),
        };
        return Ok(FieldDescriptor::simple(&field.name, column));
    };

    let parts = tag.split(',').collect::<Vec<_>>();
    let [table, left, right] = parts.as_slice() else {
        return Err(SchemaError::ForeignArity {
            field: field.name.clone(),
            found: parts.len(),
        });
    };

    let FieldKind::Record { id, describe } = field.kind else {
        return Err(SchemaError::ForeignNotRecord {
            field: field.name.clone(),
        });
    };

    let nested = describe();
    if path.iter().any(|(seen, _)| *seen == Some(id)) {
        let mut chain = path.iter().map(|(_, name)| *name).collect::<Vec<_>>();
        chain.push(nested.name);
        return Err(SchemaError::CircularReference(chain.join(" -> ")));
    }

    path.push((Some(id), nested.name));
    let fields = reflect_fields(&nested, path)?;
    path.pop();

    Ok(FieldDescriptor::foreign(
        &field.name,
        ForeignDescriptor {
            fields,
            table: table.to_string(),
            left: left.to_string(),
            right: right.to_string(),
        },
    ))
}
