pub mod bind;
pub mod record;
pub mod row;
pub mod scan;
