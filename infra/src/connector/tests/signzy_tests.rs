//! Tests for the verification service client against a mock HTTP server

use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kyc_core::domain::entities::REDACTED;
use kyc_core::errors::KycError;
use kyc_core::repositories::MockRequestLogRepository;
use kyc_core::services::kyc::{Endpoint, KycClient};
use kyc_shared::ConnectorConfig;

use crate::connector::{error_message, SignzyClient, UNKNOWN_ERROR};

const SECRET: &str = "test-authorization-secret";

fn client_for(server: &MockServer) -> (SignzyClient, Arc<MockRequestLogRepository>) {
    let logs = Arc::new(MockRequestLogRepository::new());
    let config = ConnectorConfig::new(server.uri(), SECRET).with_timeout_secs(5);
    let client = SignzyClient::new(config, logs.clone()).unwrap();
    (client, logs)
}

#[test]
fn test_error_message_precedence() {
    assert_eq!(
        error_message(r#"{"error": {"message": "Invalid PAN"}, "message": "Bad Request"}"#),
        "Invalid PAN"
    );
    assert_eq!(error_message(r#"{"message": "Bad Request"}"#), "Bad Request");
    assert_eq!(error_message(r#"{"error": {"code": 400}}"#), UNKNOWN_ERROR);
    assert_eq!(error_message("<html>502</html>"), UNKNOWN_ERROR);
}

#[tokio::test]
async fn test_posts_json_with_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/pan/verify"))
        .and(header("Authorization", SECRET))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"pan": "ABCDE1234F", "name": "Asha Rao", "dob": "07/04/1990"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {"panStatus": "E", "dob": "Y", "name": "Y"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, logs) = client_for(&server);
    let response = client
        .call(
            Endpoint::VerifyPan,
            json!({"pan": "ABCDE1234F", "name": "Asha Rao", "dob": "07/04/1990"}),
        )
        .await
        .unwrap();

    assert_eq!(response["result"]["panStatus"], "E");

    let entries = logs.get_all_logs();
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.api_method, "Verify PAN");
    assert_eq!(entry.url, format!("{}/pan/verify", server.uri()));
    assert_eq!(entry.status_code, Some(200));
    let header = entry.header.as_deref().unwrap();
    assert!(header.contains(REDACTED));
    assert!(!header.contains(SECRET));
}

#[tokio::test]
async fn test_error_response_surfaces_service_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bankAccountVerification/upiVerifications"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"message": "Invalid VPA", "statusCode": 400}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, logs) = client_for(&server);
    let err = client
        .call(Endpoint::VerifyUpi, json!({"vpa": "x", "name": "y", "fuzzy": false}))
        .await
        .unwrap_err();

    assert_eq!(err, KycError::service_call_failed("Verify UPI", "Invalid VPA"));

    let entries = logs.get_all_logs();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].status_code, Some(400));
    assert!(entries[0].response.as_deref().unwrap().contains("Invalid VPA"));
}

#[tokio::test]
async fn test_error_without_message_is_unknown() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/aadhaar/verify"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&server)
        .await;

    let (client, logs) = client_for(&server);
    let err = client
        .call(Endpoint::VerifyAadhaar, json!({"uid": "234567890123"}))
        .await
        .unwrap_err();

    assert_eq!(err, KycError::service_call_failed("Verify Aadhaar", UNKNOWN_ERROR));
    assert_eq!(
        logs.get_all_logs()[0].response.as_deref(),
        Some("Internal Server Error")
    );
}

#[tokio::test]
async fn test_unconfigured_connector_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let logs = Arc::new(MockRequestLogRepository::new());
    let client = SignzyClient::new(ConnectorConfig::new(server.uri(), ""), logs.clone()).unwrap();

    let err = client
        .call(Endpoint::GenerateOtp, json!({"countryCode": "91", "mobileNumber": "9876543210"}))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        KycError::Configuration {
            message: "Signzy Connector URL or Authorization is not set".to_string()
        }
    );
    assert!(logs.get_all_logs().is_empty());
}

#[tokio::test]
async fn test_transport_error_is_logged() {
    // nothing listens on port 1
    let logs = Arc::new(MockRequestLogRepository::new());
    let client =
        SignzyClient::new(ConnectorConfig::new("http://127.0.0.1:1", SECRET), logs.clone()).unwrap();

    let err = client
        .call(Endpoint::VerifyVehicleRc, json!({"vehicleNumber": "KA01AB1234"}))
        .await
        .unwrap_err();

    assert!(matches!(err, KycError::ServiceCallFailed { ref endpoint, .. } if endpoint == "Verify Vehicle RC"));
    let entries = logs.get_all_logs();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].status_code, None);
}

#[tokio::test]
async fn test_request_log_failure_does_not_fail_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/phone/generateOtp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {"referenceId": "ref-1"}
        })))
        .mount(&server)
        .await;

    let (client, logs) = client_for(&server);
    logs.set_should_fail(true);

    let response = client
        .call(Endpoint::GenerateOtp, json!({"countryCode": "91", "mobileNumber": "9876543210"}))
        .await
        .unwrap();

    assert_eq!(response["result"]["referenceId"], "ref-1");
}
