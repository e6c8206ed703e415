pub mod ast;
pub mod compiler;
pub mod dialect;
pub mod generator;
pub mod token;
