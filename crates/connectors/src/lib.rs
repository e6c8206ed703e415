//! Query capability traits, the record fetch facade and the PostgreSQL adapter.

pub mod error;
pub mod executor;
pub mod postgres;
pub mod querier;

pub use error::{ConnectorError, FetchError, QueryError};
pub use executor::{Executor, fetch_all, fetch_one};
