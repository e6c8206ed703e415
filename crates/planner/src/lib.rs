//! SQL statement model, compiler and `SELECT` generation.

pub mod query;
