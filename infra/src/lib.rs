//! # Infrastructure Layer
//!
//! Concrete implementations behind the `kyc_core` traits:
//! - **Connector**: the HTTP client for the verification service
//! - **Database**: MySQL storage of outbound request logs using SQLx
//!
//! ## Features
//!
//! - `mysql`: Enable the MySQL request log store (default)

use kyc_core::errors::KycError;
use kyc_shared::ConfigError;

/// Verification service connector
pub mod connector;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

pub use connector::SignzyClient;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Malformed JSON from or for the verification service
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ConfigError> for InfrastructureError {
    fn from(err: ConfigError) -> Self {
        InfrastructureError::Config(err.to_string())
    }
}

impl From<InfrastructureError> for KycError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Config(message) => KycError::Configuration { message },
            other => KycError::Internal {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_keeps_message() {
        let err: KycError = InfrastructureError::from(ConfigError::ConnectorNotConfigured).into();
        assert_eq!(
            err,
            KycError::Configuration {
                message: "Signzy Connector URL or Authorization is not set".to_string()
            }
        );
    }

    #[test]
    fn test_serialization_error_is_internal() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: KycError = InfrastructureError::from(json_err).into();
        assert!(matches!(err, KycError::Internal { .. }));
    }
}
