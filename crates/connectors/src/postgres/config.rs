use crate::error::ConnectorError;
use tokio_postgres::{Config, config::SslMode};

/// Environment variable consulted by [`PgConfig::from_env`].
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Connection settings for [`PgQuerier`](super::PgQuerier).
#[derive(Debug, Clone)]
pub struct PgConfig {
    url: String,
    config: Config,
}

impl PgConfig {
    pub fn new(url: &str) -> Result<Self, ConnectorError> {
        let config = url
            .parse::<Config>()
            .map_err(|e| ConnectorError::InvalidUrl(e.to_string()))?;
        Ok(Self {
            url: url.to_string(),
            config,
        })
    }

    /// Reads the URL from `DATABASE_URL`.
    pub fn from_env() -> Result<Self, ConnectorError> {
        let url = std::env::var(DATABASE_URL_ENV)
            .map_err(|_| ConnectorError::MissingUrl(DATABASE_URL_ENV))?;
        Self::new(&url)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn ssl_mode(&self) -> SslMode {
        self.config.get_ssl_mode()
    }

    pub(crate) fn driver_config(&self) -> &Config {
        &self.config
    }
}
