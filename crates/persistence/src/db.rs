//! Database connection management.
//!
//! Repositories never hold a connection between calls. Each operation asks a
//! [`Connector`] for a fresh connection and owns it until it returns.

use async_trait::async_trait;
use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, PgConnection};
use std::io;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_connect_timeout() -> u64 {
    10
}

/// Produces a ready-to-use database connection on demand.
///
/// The returned connection serves exactly one unit of work; the caller closes
/// it (dropping it is enough).
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self) -> Result<PgConnection, sqlx::Error>;
}

/// Opens a new PostgreSQL connection for every call.
#[derive(Debug, Clone)]
pub struct PgConnector {
    options: PgConnectOptions,
    connect_timeout: Duration,
}

impl PgConnector {
    /// Creates a connector from the given configuration.
    ///
    /// Fails if the database URL cannot be parsed. No connection is opened.
    pub fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let options = PgConnectOptions::from_str(&config.url)?;
        Ok(Self {
            options,
            connect_timeout: Duration::from_secs(config.connect_timeout_secs),
        })
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }
}

#[async_trait]
impl Connector for PgConnector {
    async fn connect(&self) -> Result<PgConnection, sqlx::Error> {
        debug!("Opening database connection");

        match tokio::time::timeout(self.connect_timeout, PgConnection::connect_with(&self.options))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(sqlx::Error::Io(io::Error::new(
                io::ErrorKind::TimedOut,
                format!(
                    "timed out after {}s connecting to database",
                    self.connect_timeout.as_secs()
                ),
            ))),
        }
    }
}
