use thiserror::Error;

/// Errors raised while turning a record description into a `Schema`, or while
/// binding an instance against one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A foreign tag did not split into `table,left,right`.
    #[error("expected 3 fields (table, left, right) in foreign tag of `{field}`: got {found}")]
    ForeignArity { field: String, found: usize },

    /// A foreign tag was put on a field that is not backed by a record type.
    #[error("foreign fields must be structs: field `{field}` is a scalar")]
    ForeignNotRecord { field: String },

    /// A record-typed field was declared without a foreign relation.
    #[error("record field `{field}` must declare a foreign relation (table,left,right)")]
    RecordWithoutRelation { field: String },

    /// A record type reaches itself again through its foreign relations.
    #[error("circular foreign relation: {0}")]
    CircularReference(String),

    /// The instance exposes a different number of fields than it describes.
    #[error("record `{record}` describes {expected} fields but exposes {found}")]
    FieldCount {
        record: String,
        expected: usize,
        found: usize,
    },

    /// The instance exposes a field whose shape disagrees with its descriptor.
    #[error("field `{field}` is described as {expected} but exposed as {found}")]
    FieldShape {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Why a single value could not be written into a scan target.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssignError {
    #[error("cannot assign {found} to {expected}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("cannot assign NULL to non-optional {expected}")]
    UnexpectedNull { expected: &'static str },

    #[error("value {value} out of range for {expected}")]
    OutOfRange { expected: &'static str, value: i64 },
}

/// Errors raised while scanning a result row into bound targets.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The row and the bound target list disagree on arity.
    #[error("expected {targets} destination arguments in scan, row has {columns} columns")]
    ColumnCount { columns: usize, targets: usize },

    /// A column value could not be assigned to its target.
    #[error("can't scan column {column}: {source}")]
    Assign {
        column: usize,
        #[source]
        source: AssignError,
    },

    /// The driver could not decode a column.
    #[error("can't decode column {column}: {message}")]
    Decode { column: usize, message: String },
}
