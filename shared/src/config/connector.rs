//! Verification service connector configuration

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

use super::ConfigError;

/// Country code used for mobile verification when a record carries none
pub const DEFAULT_COUNTRY_CODE: &str = "91";

/// Endpoint and credentials of the verification service
#[derive(Clone, Deserialize, Serialize)]
pub struct ConnectorConfig {
    /// Base URL of the verification service, without trailing slash
    pub base_url: String,

    /// Value sent verbatim in the `Authorization` header
    pub authorization: String,

    /// Public URL of the host site, used to absolutize uploaded file paths
    #[serde(default)]
    pub site_url: String,

    /// Country code for OTP requests
    #[serde(default = "default_country_code")]
    pub default_country_code: String,

    /// Optional request timeout; calls wait indefinitely when unset
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl ConnectorConfig {
    /// Create a connector configuration with defaults for the optional fields
    pub fn new(base_url: impl Into<String>, authorization: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            authorization: authorization.into(),
            site_url: String::new(),
            default_country_code: default_country_code(),
            request_timeout_secs: None,
        }
    }

    /// Set the host site URL
    pub fn with_site_url(mut self, site_url: impl Into<String>) -> Self {
        self.site_url = site_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a request timeout in seconds
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = Some(secs);
        self
    }

    /// Load connector configuration from environment variables
    ///
    /// Missing URL or authorization is not an error here; `validate` reports
    /// it when a call is about to be made.
    pub fn from_env() -> Result<Self, ConfigError> {
        let request_timeout_secs = match env::var("KYC_REQUEST_TIMEOUT_SECS") {
            Ok(value) => Some(value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "KYC_REQUEST_TIMEOUT_SECS".to_string(),
                value,
            })?),
            Err(_) => None,
        };

        Ok(Self {
            base_url: env::var("KYC_CONNECTOR_URL")
                .unwrap_or_default()
                .trim_end_matches('/')
                .to_string(),
            authorization: env::var("KYC_CONNECTOR_AUTHORIZATION").unwrap_or_default(),
            site_url: env::var("KYC_SITE_URL")
                .unwrap_or_default()
                .trim_end_matches('/')
                .to_string(),
            default_country_code: env::var("KYC_DEFAULT_COUNTRY_CODE")
                .unwrap_or_else(|_| default_country_code()),
            request_timeout_secs,
        })
    }

    /// Check that the connector can be used
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() || self.authorization.trim().is_empty() {
            return Err(ConfigError::ConnectorNotConfigured);
        }
        Ok(())
    }

    /// Full URL for an endpoint path such as `/pan/verify`
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl fmt::Debug for ConnectorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectorConfig")
            .field("base_url", &self.base_url)
            .field("authorization", &"********")
            .field("site_url", &self.site_url)
            .field("default_country_code", &self.default_country_code)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

fn default_country_code() -> String {
    DEFAULT_COUNTRY_CODE.to_string()
}
