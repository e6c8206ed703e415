use model::{ScanError, SchemaError};
use thiserror::Error;

/// A failure reported by the query capability, passed through as is.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Postgres(#[from] tokio_postgres::Error),

    /// Any other driver error.
    #[error(transparent)]
    Driver(Box<dyn std::error::Error + Send + Sync>),
}

impl QueryError {
    pub fn driver(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        QueryError::Driver(err.into())
    }
}

/// All errors a fetch can end with.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("query error: {0}")]
    Query(#[from] QueryError),

    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    /// A single-row fetch matched nothing.
    #[error("no rows in result set")]
    NoRows,
}

/// Errors happening while opening a connection.
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("invalid connection url: {0}")]
    InvalidUrl(String),

    #[error("missing connection url: set {0}")]
    MissingUrl(&'static str),

    #[error("postgres connection failed: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    #[error("TLS setup failed: {0}")]
    Tls(#[from] native_tls::Error),
}
