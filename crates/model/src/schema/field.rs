//! Reflected field metadata shared by the assembler and the binder.

/// Column tag value that removes a field from both the projection and the
/// bound target list.
pub const OMIT_SENTINEL: &str = "-";

/// Appended to a relation's right column to form its join alias.
pub const ALIAS_SUFFIX: &str = "_reference";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Declared field name.
    pub field: String,
    /// Column selected for a simple field. Unused when `foreign` is set.
    pub column: String,
    pub omitted: bool,
    pub foreign: Option<ForeignDescriptor>,
}

impl FieldDescriptor {
    pub fn simple(field: &str, column: &str) -> Self {
        Self {
            field: field.to_string(),
            column: column.to_string(),
            omitted: column == OMIT_SENTINEL,
            foreign: None,
        }
    }

    pub fn foreign(field: &str, foreign: ForeignDescriptor) -> Self {
        Self {
            field: field.to_string(),
            column: String::new(),
            omitted: false,
            foreign: Some(foreign),
        }
    }

    /// Number of columns this field projects, which is also the number of
    /// scan targets it binds.
    pub fn column_count(&self) -> usize {
        if self.omitted {
            return 0;
        }
        match &self.foreign {
            Some(foreign) => foreign.column_count(),
            None => 1,
        }
    }
}

/// A single-hop equi-join: `alias.left = owner.right`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignDescriptor {
    pub fields: Vec<FieldDescriptor>,
    pub table: String,
    pub left: String,
    pub right: String,
}

impl ForeignDescriptor {
    pub fn alias(&self) -> String {
        format!("{}{ALIAS_SUFFIX}", self.right)
    }

    pub fn column_count(&self) -> usize {
        self.fields.iter().map(FieldDescriptor::column_count).sum()
    }
}

/// Ordered field metadata of one record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    record: String,
    fields: Vec<FieldDescriptor>,
}

impl Schema {
    pub fn new(record: &str, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            record: record.to_string(),
            fields,
        }
    }

    pub fn record(&self) -> &str {
        &self.record
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Projected column count, depth-first through relations.
    pub fn column_count(&self) -> usize {
        self.fields.iter().map(FieldDescriptor::column_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people(right: &str) -> ForeignDescriptor {
        ForeignDescriptor {
            fields: vec![
                FieldDescriptor::simple("ID", "id"),
                FieldDescriptor::simple("Name", "name"),
                FieldDescriptor::simple("Notes", "-"),
            ],
            table: "people".into(),
            left: "id".into(),
            right: right.into(),
        }
    }

    #[test]
    fn test_alias_is_derived_from_right_column() {
        assert_eq!(people("person_a_id").alias(), "person_a_id_reference");
        assert_eq!(people("person_a_id").alias(), people("person_a_id").alias());
    }

    #[test]
    fn test_column_count_skips_omitted() {
        let schema = Schema::new(
            "Friends",
            vec![
                FieldDescriptor::simple("ID", "id"),
                FieldDescriptor::simple("Secret", "-"),
                FieldDescriptor::foreign("PersonA", people("person_a_id")),
            ],
        );

        assert_eq!(schema.column_count(), 3);
        assert!(schema.fields()[1].omitted);
    }
}
