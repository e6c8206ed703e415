pub mod config;
pub mod connect;
pub mod params;
pub mod querier;
pub mod row;

pub use config::PgConfig;
pub use querier::{PgCursor, PgQuerier};
pub use row::PgRow;
