//! Request log retention configuration

use serde::{Deserialize, Serialize};
use std::env;

use super::ConfigError;

/// Request logs older than this many days are purged
pub const DEFAULT_RETENTION_DAYS: i64 = 1000;

/// Longest retention window accepted from configuration
pub const MAX_RETENTION_DAYS: i64 = 36_500;

const RETENTION_DAYS_KEY: &str = "KYC_REQUEST_LOG_RETENTION_DAYS";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RequestLogConfig {
    #[serde(default = "default_retention_days")]
    pub retention_days: i64,
}

impl Default for RequestLogConfig {
    fn default() -> Self {
        Self {
            retention_days: DEFAULT_RETENTION_DAYS,
        }
    }
}

impl RequestLogConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(RETENTION_DAYS_KEY) {
            Ok(value) => Ok(Self {
                retention_days: parse_retention_days(value)?,
            }),
            Err(_) => Ok(Self::default()),
        }
    }
}

/// Retention must be between 1 and `MAX_RETENTION_DAYS` days
fn parse_retention_days(value: String) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|days| (1..=MAX_RETENTION_DAYS).contains(days))
        .ok_or(ConfigError::InvalidValue {
            key: RETENTION_DAYS_KEY.to_string(),
            value,
        })
}

fn default_retention_days() -> i64 {
    DEFAULT_RETENTION_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_retention_days() {
        assert_eq!(parse_retention_days("30".to_string()), Ok(30));
        assert_eq!(
            parse_retention_days(MAX_RETENTION_DAYS.to_string()),
            Ok(MAX_RETENTION_DAYS)
        );
    }

    #[test]
    fn test_parse_retention_days_rejects_out_of_range() {
        for value in ["0", "-5", "36501", "1000000000000", "forever"] {
            assert_eq!(
                parse_retention_days(value.to_string()),
                Err(ConfigError::InvalidValue {
                    key: RETENTION_DAYS_KEY.to_string(),
                    value: value.to_string(),
                })
            );
        }
    }
}
