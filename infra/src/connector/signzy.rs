//! Signzy connector client
//!
//! Implements [`KycClient`] over reqwest. Requests carry the configured
//! authorization verbatim; request logs only ever see it redacted.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use kyc_core::domain::entities::RequestLog;
use kyc_core::errors::{KycError, KycResult};
use kyc_core::repositories::{NoOpRequestLogRepository, RequestLogRepository};
use kyc_core::services::kyc::{Endpoint, KycClient};
use kyc_shared::ConnectorConfig;

use crate::InfrastructureError;

/// Message used when an error response carries no readable message
pub const UNKNOWN_ERROR: &str = "Unknown error";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Extract the service's error message from a response body
///
/// Looks at `error.message`, then `message`.
pub fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return UNKNOWN_ERROR.to_string();
    };

    value
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .or_else(|| value.get("message").and_then(Value::as_str))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or(UNKNOWN_ERROR)
        .to_string()
}

/// Verification service client
pub struct SignzyClient {
    http: reqwest::Client,
    config: ConnectorConfig,
    request_log: Arc<dyn RequestLogRepository>,
}

impl SignzyClient {
    /// Create a client that writes request logs to `request_log`
    ///
    /// The configuration is not validated here; an unconfigured connector
    /// fails on the first call instead.
    pub fn new(
        config: ConnectorConfig,
        request_log: Arc<dyn RequestLogRepository>,
    ) -> Result<Self, InfrastructureError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        info!(
            base_url = %config.base_url,
            timeout_secs = ?config.request_timeout_secs,
            "Verification service client initialized"
        );

        Ok(Self {
            http,
            config,
            request_log,
        })
    }

    /// Create a client that keeps no request logs
    pub fn without_request_log(config: ConnectorConfig) -> Result<Self, InfrastructureError> {
        Self::new(config, Arc::new(NoOpRequestLogRepository::new()))
    }

    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    async fn record(&self, log: RequestLog) {
        if let Err(e) = self.request_log.create(&log).await {
            warn!(
                api_method = %log.api_method,
                error = %e,
                event = "request_log_write_failed",
                "Failed to write request log"
            );
        }
    }
}

#[async_trait]
impl KycClient for SignzyClient {
    async fn call(&self, endpoint: Endpoint, payload: Value) -> KycResult<Value> {
        self.config.validate()?;

        let api_name = endpoint.api_name();
        let url = self.config.endpoint_url(endpoint.path());
        let log = RequestLog::new(api_name, url.as_str())
            .with_headers([
                ("Authorization", self.config.authorization.as_str()),
                ("Content-Type", JSON_CONTENT_TYPE),
            ])
            .with_payload(&payload);

        debug!(endpoint = api_name, url = %url, "Calling verification service");

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, self.config.authorization.as_str())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .json(&payload)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                error!(
                    endpoint = api_name,
                    error = %e,
                    event = "service_call_transport_error",
                    "Verification service unreachable"
                );
                self.record(log.with_transport_error(&e.to_string())).await;
                return Err(KycError::service_call_failed(api_name, e.to_string()));
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                self.record(log.with_transport_error(&e.to_string())).await;
                return Err(KycError::service_call_failed(api_name, e.to_string()));
            }
        };

        self.record(log.with_response(status.as_u16(), &body)).await;

        if !status.is_success() {
            let message = error_message(&body);
            warn!(
                endpoint = api_name,
                status = status.as_u16(),
                message = %message,
                event = "service_call_rejected",
                "Verification service returned an error"
            );
            return Err(KycError::service_call_failed(api_name, message));
        }

        serde_json::from_str(&body).map_err(|e| {
            error!(
                endpoint = api_name,
                error = %e,
                event = "service_call_invalid_body",
                "Verification service returned invalid JSON"
            );
            KycError::service_call_failed(api_name, format!("Invalid response body: {}", e))
        })
    }
}
