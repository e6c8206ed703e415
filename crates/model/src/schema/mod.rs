pub mod cache;
pub mod describe;
pub mod field;
pub mod reflect;
