//! Tests for the OTP verification session

use serde_json::json;
use std::sync::Arc;

use crate::domain::value_objects::{ChallengeHandle, VerificationOutcome, VerificationRequest};
use crate::errors::KycError;
use crate::services::kyc::{
    Endpoint, SessionOutcome, SessionState, VerificationSession, MOBILE_VERIFIED_MESSAGE,
    OTP_FAILED_MESSAGE, OTP_PROMPT_TITLE,
};

use super::mocks::{RecordingProgress, ScriptedClient, ScriptedPrompt};

fn request() -> VerificationRequest {
    VerificationRequest::new("9876543210", "91")
}

fn challenge_ok() -> serde_json::Value {
    json!({"result": {"referenceId": "ref-42"}})
}

fn session(client: &Arc<ScriptedClient>) -> VerificationSession<ScriptedClient> {
    VerificationSession::new(client.clone(), Arc::new(RecordingProgress::new()))
}

#[tokio::test]
async fn test_request_challenge_issues_handle() {
    let client = Arc::new(ScriptedClient::new().respond(challenge_ok()));
    let progress = Arc::new(RecordingProgress::new());
    let mut session = VerificationSession::new(client.clone(), progress.clone());

    let handle = session.request_challenge(request()).await.unwrap();

    assert_eq!(handle.reference_id(), "ref-42");
    assert_eq!(session.state(), SessionState::AwaitingCode);
    assert_eq!(client.endpoints(), vec![Endpoint::GenerateOtp]);
    assert_eq!(
        client.payload(0),
        json!({"countryCode": "91", "mobileNumber": "9876543210"})
    );
    assert_eq!(
        progress.events(),
        vec!["begin:Verifying....", "end", "alert:OTP sent successfully"]
    );
}

#[tokio::test]
async fn test_blank_mobile_number_makes_no_call() {
    let client = Arc::new(ScriptedClient::new());
    let mut session = session(&client);

    let err = session
        .request_challenge(VerificationRequest::new("  ", "91"))
        .await
        .unwrap_err();

    assert!(matches!(err, KycError::InputMissing { .. }));
    assert_eq!(client.call_count(), 0);
    assert_eq!(session.state(), SessionState::Idle);
}

#[tokio::test]
async fn test_missing_reference_fails_session() {
    let client = Arc::new(ScriptedClient::new().respond(json!({"result": {}})));
    let mut session = session(&client);

    let err = session.request_challenge(request()).await.unwrap_err();

    assert_eq!(err, KycError::MissingChallengeToken);
    assert_eq!(session.state(), SessionState::Failed);
}

#[tokio::test]
async fn test_challenge_service_error_is_not_retried() {
    let client = Arc::new(ScriptedClient::new().fail(Endpoint::GenerateOtp, "Invalid mobile number"));
    let progress = Arc::new(RecordingProgress::new());
    let mut session = VerificationSession::new(client.clone(), progress.clone());

    let err = session.request_challenge(request()).await.unwrap_err();

    assert!(matches!(err, KycError::ServiceCallFailed { .. }));
    assert_eq!(client.call_count(), 1);
    assert_eq!(session.state(), SessionState::Failed);
    // busy feedback is closed even on failure
    assert_eq!(progress.events(), vec!["begin:Verifying....", "end"]);
}

#[tokio::test]
async fn test_submit_with_issued_handle_verifies() {
    let client = Arc::new(
        ScriptedClient::new()
            .respond(challenge_ok())
            .respond(json!({"result": {"mobileNumber": "9876543210", "name": "Asha"}})),
    );
    let mut session = session(&client);

    let handle = session.request_challenge(request()).await.unwrap();
    let outcome = session.submit_response(handle, "123456").await.unwrap();

    assert_eq!(outcome, VerificationOutcome::verified(MOBILE_VERIFIED_MESSAGE));
    assert_eq!(session.state(), SessionState::Verified);
    assert_eq!(
        client.payload(1),
        json!({
            "countryCode": "91",
            "mobileNumber": "9876543210",
            "referenceId": "ref-42",
            "otp": "123456",
            "extraFields": false
        })
    );
}

#[tokio::test]
async fn test_submit_negative_verdict() {
    let client = Arc::new(ScriptedClient::new().respond(challenge_ok()).respond(json!({})));
    let mut session = session(&client);

    let handle = session.request_challenge(request()).await.unwrap();
    let outcome = session.submit_response(handle, "000000").await.unwrap();

    assert_eq!(outcome, VerificationOutcome::not_verified(OTP_FAILED_MESSAGE));
    assert_eq!(session.state(), SessionState::NotVerified);
}

#[tokio::test]
async fn test_submit_empty_result_verifies() {
    let client = Arc::new(ScriptedClient::new().respond(challenge_ok()).respond(json!({"result": {}})));
    let mut session = session(&client);

    let handle = session.request_challenge(request()).await.unwrap();
    let outcome = session.submit_response(handle, "123456").await.unwrap();

    assert_eq!(outcome, VerificationOutcome::verified(MOBILE_VERIFIED_MESSAGE));
    assert_eq!(session.state(), SessionState::Verified);
}

#[tokio::test]
async fn test_foreign_handle_rejected_before_call() {
    let client = Arc::new(ScriptedClient::new().respond(challenge_ok()));
    let mut session = session(&client);
    session.request_challenge(request()).await.unwrap();

    let err = session
        .submit_response(ChallengeHandle::from_reference("ref-other"), "123456")
        .await
        .unwrap_err();

    assert_eq!(err, KycError::ForeignHandle);
    assert_eq!(client.call_count(), 1);
    assert_eq!(session.state(), SessionState::AwaitingCode);
}

#[tokio::test]
async fn test_handle_from_fresh_session_is_foreign() {
    let client = Arc::new(ScriptedClient::new());
    let mut session = session(&client);

    let err = session
        .submit_response(ChallengeHandle::from_reference("ref-42"), "123456")
        .await
        .unwrap_err();

    assert_eq!(err, KycError::ForeignHandle);
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn test_handle_cannot_be_reused() {
    let client = Arc::new(
        ScriptedClient::new()
            .respond(challenge_ok())
            .respond(json!({"result": {"name": "Asha"}})),
    );
    let mut session = session(&client);

    let handle = session.request_challenge(request()).await.unwrap();
    session.submit_response(handle, "123456").await.unwrap();

    let err = session
        .submit_response(ChallengeHandle::from_reference("ref-42"), "123456")
        .await
        .unwrap_err();

    assert_eq!(err, KycError::HandleConsumed);
    assert_eq!(client.call_count(), 2);
}

#[tokio::test]
async fn test_blank_code_keeps_session_awaiting() {
    let client = Arc::new(ScriptedClient::new().respond(challenge_ok()));
    let mut session = session(&client);

    let handle = session.request_challenge(request()).await.unwrap();
    let err = session.submit_response(handle, " ").await.unwrap_err();

    assert!(matches!(err, KycError::InputMissing { .. }));
    assert_eq!(session.state(), SessionState::AwaitingCode);
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn test_submit_service_error_fails_session() {
    let client = Arc::new(
        ScriptedClient::new()
            .respond(challenge_ok())
            .fail(Endpoint::SubmitOtp, "OTP expired"),
    );
    let mut session = session(&client);

    let handle = session.request_challenge(request()).await.unwrap();
    let err = session.submit_response(handle, "123456").await.unwrap_err();

    assert_eq!(
        err,
        KycError::service_call_failed("Submit OTP", "OTP expired")
    );
    assert_eq!(session.state(), SessionState::Failed);
}

#[tokio::test]
async fn test_second_challenge_is_rejected() {
    let client = Arc::new(ScriptedClient::new().respond(challenge_ok()));
    let mut session = session(&client);
    session.request_challenge(request()).await.unwrap();

    let err = session.request_challenge(request()).await.unwrap_err();

    assert!(matches!(err, KycError::SessionState { .. }));
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn test_verify_runs_full_flow() {
    let client = Arc::new(
        ScriptedClient::new()
            .respond(challenge_ok())
            .respond(json!({"result": {"name": "Asha"}})),
    );
    let mut session = session(&client);
    let prompt = ScriptedPrompt::answering("123456");

    let outcome = session.verify(request(), &prompt).await.unwrap();

    assert_eq!(
        outcome,
        SessionOutcome::Completed(VerificationOutcome::verified(MOBILE_VERIFIED_MESSAGE))
    );
    assert_eq!(prompt.titles.lock().unwrap().clone(), vec![OTP_PROMPT_TITLE]);
    assert_eq!(client.endpoints(), vec![Endpoint::GenerateOtp, Endpoint::SubmitOtp]);
}

#[tokio::test]
async fn test_cancelled_prompt_issues_no_submit() {
    let client = Arc::new(ScriptedClient::new().respond(challenge_ok()));
    let mut session = session(&client);
    let prompt = ScriptedPrompt::cancelling();

    let outcome = session.verify(request(), &prompt).await.unwrap();

    assert_eq!(outcome, SessionOutcome::Cancelled);
    assert_eq!(session.state(), SessionState::Cancelled);
    assert_eq!(prompt.times_asked(), 1);
    assert_eq!(client.endpoints(), vec![Endpoint::GenerateOtp]);
}
