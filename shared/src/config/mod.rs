//! Configuration module
//!
//! - `connector` - Verification service endpoint and credentials
//! - `database` - Request log store connection
//! - `environment` - Environment detection and logging configuration
//! - `request_log` - Retention of outbound request logs

pub mod connector;
pub mod database;
pub mod environment;
pub mod request_log;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use connector::{ConnectorConfig, DEFAULT_COUNTRY_CODE};
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use request_log::{RequestLogConfig, DEFAULT_RETENTION_DAYS, MAX_RETENTION_DAYS};

/// Configuration loading and validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Signzy Connector URL or Authorization is not set")]
    ConnectorNotConfigured,

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Verification service connector
    pub connector: ConnectorConfig,

    /// Request log store; request logs are not persisted when unset
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    /// Request log retention
    #[serde(default)]
    pub request_log: RequestLogConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment
    ///
    /// A `.env` file is read first when present; variables already set in the
    /// process environment take precedence.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env();
        Ok(Self {
            environment,
            connector: ConnectorConfig::from_env()?,
            database: DatabaseConfig::from_env(),
            request_log: RequestLogConfig::from_env()?,
            logging: LoggingConfig::for_environment(environment),
        })
    }
}
