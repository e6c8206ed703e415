//! Record descriptions, reflected schemas, values and scan binding.

pub mod core;
pub mod errors;
pub mod macros;
pub mod records;
pub mod schema;

pub use errors::{AssignError, ScanError, SchemaError};
