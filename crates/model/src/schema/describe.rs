//! Static descriptions that record types publish about themselves.
//!
//! A `RecordType` carries the raw tag text of each field exactly as the
//! author wrote it; interpreting the tags is the reflector's job.

use crate::records::record::Record;
use std::any::TypeId;

/// The ordered field list of a record type.
#[derive(Debug, Clone)]
pub struct RecordType {
    pub name: &'static str,
    pub fields: Vec<FieldDef>,
}

impl RecordType {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    /// Appends a field; declaration order is the order of these calls.
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }
}

/// What a field stores.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// A single column value.
    Scalar,
    /// A nested record: its type identity and a function yielding its
    /// description on demand.
    Record {
        id: TypeId,
        describe: fn() -> RecordType,
    },
}

/// One declared field together with its raw tags.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: String,
    /// Column tag: an explicit column name, or `-` to omit the field.
    pub column: Option<String>,
    /// Foreign tag: `table,left,right`.
    pub foreign: Option<String>,
    pub kind: FieldKind,
}

impl FieldDef {
    pub fn scalar(name: &str) -> Self {
        Self {
            name: name.to_string(),
            column: None,
            foreign: None,
            kind: FieldKind::Scalar,
        }
    }

    pub fn record<R: Record>(name: &str) -> Self {
        Self {
            name: name.to_string(),
            column: None,
            foreign: None,
            kind: FieldKind::Record {
                id: TypeId::of::<R>(),
                describe: R::describe,
            },
        }
    }

    pub fn column(mut self, column: &str) -> Self {
        self.column = Some(column.to_string());
        self
    }

    pub fn omit(self) -> Self {
        self.column(super::field::OMIT_SENTINEL)
    }

    pub fn foreign(mut self, tag: &str) -> Self {
        self.foreign = Some(tag.to_string());
        self
    }
}
