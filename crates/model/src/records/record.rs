use crate::{records::scan::ScanTarget, schema::describe::RecordType};

/// A value whose fields can be handed out as scan destinations, in
/// declaration order.
pub trait Fields: Send {
    /// One entry per declared field, omitted fields included, in the same
    /// order as the description.
    fn fields_mut(&mut self) -> Vec<FieldRef<'_>>;
}

/// A record type that can be selected and scanned.
///
/// `Default` supplies the zero-valued instance allocated for every row of a
/// multi-row fetch.
pub trait Record: Fields + Default + 'static {
    fn describe() -> RecordType;
}

/// Mutable access to one field of a record instance.
pub enum FieldRef<'a> {
    Scalar(&'a mut dyn ScanTarget),
    Record(&'a mut dyn Fields),
}

impl<'a> FieldRef<'a> {
    pub fn scalar<T: ScanTarget + 'a>(target: &'a mut T) -> Self {
        FieldRef::Scalar(target)
    }

    pub fn record<R: Fields + 'a>(record: &'a mut R) -> Self {
        FieldRef::Record(record)
    }

    pub(crate) fn shape(&self) -> &'static str {
        match self {
            FieldRef::Scalar(_) => "a scalar",
            FieldRef::Record(_) => "a record",
        }
    }
}
