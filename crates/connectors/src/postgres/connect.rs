use super::config::PgConfig;
use crate::error::ConnectorError;
use native_tls::TlsConnector;
use postgres_native_tls::MakeTlsConnector;
use std::future::Future;
use tokio_postgres::{Client, Config, NoTls, config::SslMode};
use tracing::{debug, error, warn};

/// Opens a client, negotiating TLS according to the URL's `sslmode`.
///
/// `prefer` (the driver default) tries TLS first and falls back to a plain
/// connection when the handshake fails.
pub async fn connect(config: &PgConfig) -> Result<Client, ConnectorError> {
    let driver = config.driver_config();
    debug!(ssl_mode = ?config.ssl_mode(), "connecting to postgres");

    match config.ssl_mode() {
        SslMode::Disable => plain(driver).await,
        SslMode::Prefer => match tls(driver).await {
            Ok(client) => Ok(client),
            Err(error) => {
                warn!(%error, "postgres TLS handshake failed, retrying without TLS");
                plain(driver).await
            }
        },
        _ => tls(driver).await,
    }
}

async fn tls(config: &Config) -> Result<Client, ConnectorError> {
    let connector = MakeTlsConnector::new(TlsConnector::builder().build()?);
    let (client, connection) = config.connect(connector).await?;
    drive(connection);
    Ok(client)
}

async fn plain(config: &Config) -> Result<Client, ConnectorError> {
    let (client, connection) = config.connect(NoTls).await?;
    drive(connection);
    Ok(client)
}

/// Polls the connection in the background until the client is dropped.
fn drive<C>(connection: C)
where
    C: Future<Output = Result<(), tokio_postgres::Error>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(err) = connection.await {
            error!(%err, "postgres connection error");
        }
    });
}
