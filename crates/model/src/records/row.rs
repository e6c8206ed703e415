use crate::{
    core::value::Value,
    errors::ScanError,
    records::scan::{ScanTarget, Scannable, scan_values},
};

/// A fully decoded result row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueRow {
    pub values: Vec<Value>,
}

impl ValueRow {
    pub fn new(values: Vec<Value>) -> Self {
        ValueRow { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, column: usize) -> Option<&Value> {
        self.values.get(column)
    }
}

impl From<Vec<Value>> for ValueRow {
    fn from(values: Vec<Value>) -> Self {
        ValueRow::new(values)
    }
}

impl Scannable for ValueRow {
    fn scan(self, targets: &mut [&mut dyn ScanTarget]) -> Result<(), ScanError> {
        scan_values(self.values, targets)
    }
}
