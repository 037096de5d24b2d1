//! Request log entity recording every call made to the verification service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

/// Placeholder written instead of credential header values
pub const REDACTED: &str = "********";

/// One outbound call and its response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestLog {
    pub id: Uuid,
    /// Human readable API name, e.g. "Verify PAN"
    pub api_method: String,
    pub url: String,
    /// Request headers as pretty JSON, credentials redacted
    pub header: Option<String>,
    /// Request body as pretty JSON
    pub payload: Option<String>,
    /// Response body, pretty JSON when it parses, raw text otherwise
    pub response: Option<String>,
    /// HTTP status, `None` when no response was received
    pub status_code: Option<u16>,
    pub created_at: DateTime<Utc>,
}

impl RequestLog {
    pub fn new(api_method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            api_method: api_method.into(),
            url: url.into(),
            header: None,
            payload: None,
            response: None,
            status_code: None,
            created_at: Utc::now(),
        }
    }

    /// Attach request headers; `Authorization` values are redacted
    pub fn with_headers<'a, I>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let map: serde_json::Map<String, JsonValue> = headers
            .into_iter()
            .map(|(name, value)| {
                let value = if name.eq_ignore_ascii_case("authorization") {
                    REDACTED
                } else {
                    value
                };
                (name.to_string(), JsonValue::String(value.to_string()))
            })
            .collect();
        self.header = serde_json::to_string_pretty(&JsonValue::Object(map)).ok();
        self
    }

    pub fn with_payload(mut self, payload: &JsonValue) -> Self {
        self.payload = serde_json::to_string_pretty(payload).ok();
        self
    }

    /// Attach the raw response body and status
    pub fn with_response(mut self, status_code: u16, body: &str) -> Self {
        self.status_code = Some(status_code);
        self.response = Some(pretty_or_raw(body));
        self
    }

    /// Record a transport failure where no response was received
    pub fn with_transport_error(mut self, error: &str) -> Self {
        self.response = Some(error.to_string());
        self
    }
}

fn pretty_or_raw(body: &str) -> String {
    serde_json::from_str::<JsonValue>(body)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_authorization_header_is_redacted() {
        let log = RequestLog::new("Verify PAN", "https://api.example.com/pan/verify").with_headers([
            ("Authorization", "secret-token"),
            ("Content-Type", "application/json"),
        ]);

        let header = log.header.unwrap();
        assert!(!header.contains("secret-token"));
        assert!(header.contains(REDACTED));
        assert!(header.contains("application/json"));
    }

    #[test]
    fn test_response_is_prettified_when_json() {
        let log = RequestLog::new("Verify UPI", "u").with_response(200, r#"{"result":{"verified":"true"}}"#);
        assert_eq!(log.status_code, Some(200));
        assert!(log.response.unwrap().contains("\n"));

        let log = RequestLog::new("Verify UPI", "u").with_response(502, "Bad Gateway");
        assert_eq!(log.response.as_deref(), Some("Bad Gateway"));
    }

    #[test]
    fn test_payload_is_pretty_json() {
        let log = RequestLog::new("Verify Aadhaar", "u").with_payload(&json!({"uid": "234567890123"}));
        assert_eq!(log.payload.as_deref(), Some("{\n  \"uid\": \"234567890123\"\n}"));
    }
}
