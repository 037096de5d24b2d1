//! Error types for verification flows.

use thiserror::Error;

use kyc_shared::ConfigError;

/// Errors raised by verification flows
///
/// A negative verdict is not an error: it is an `Ok` outcome with
/// `verified == false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KycError {
    #[error("Required field missing: {field}")]
    InputMissing { field: String },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("{endpoint} failed: {message}")]
    ServiceCallFailed { endpoint: String, message: String },

    #[error("No reference issued for the OTP challenge")]
    MissingChallengeToken,

    #[error("Challenge handle was not issued by this session")]
    ForeignHandle,

    #[error("Challenge handle has already been consumed")]
    HandleConsumed,

    #[error("Invalid session state: expected {expected}, found {actual}")]
    SessionState { expected: String, actual: String },

    #[error("Trigger {trigger} does not apply to {record}")]
    UnsupportedTrigger { trigger: String, record: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl KycError {
    pub fn input_missing(field: impl Into<String>) -> Self {
        KycError::InputMissing {
            field: field.into(),
        }
    }

    pub fn service_call_failed(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        KycError::ServiceCallFailed {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }
}

impl From<ConfigError> for KycError {
    fn from(err: ConfigError) -> Self {
        KycError::Configuration {
            message: err.to_string(),
        }
    }
}

pub type KycResult<T> = Result<T, KycError>;
