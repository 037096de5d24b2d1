//! OTP challenge/response verification of a mobile number

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use kyc_shared::phone::mask_phone_number;

use super::config::OTP_PROMPT_TITLE;
use super::planner::{plan_generate_otp, plan_submit_otp};
use super::traits::{invoke, CodePrompt, KycClient, ProgressReporter};
use super::verdict::{challenge_reference, otp_verified};
use crate::domain::value_objects::{
    ChallengeHandle, UserMessage, VerificationOutcome, VerificationRequest,
};
use crate::errors::{KycError, KycResult};

pub const OTP_SENT_MESSAGE: &str = "OTP sent successfully";
pub const MOBILE_VERIFIED_MESSAGE: &str = "Mobile Number Verified Successfully";
pub const OTP_FAILED_MESSAGE: &str = "OTP Verification Failed";

/// Lifecycle of a session
///
/// `Verified`, `NotVerified`, `Failed` and `Cancelled` are terminal; a
/// session never returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    ChallengeRequested,
    AwaitingCode,
    Submitted,
    Verified,
    NotVerified,
    Failed,
    Cancelled,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SessionState::Verified
                | SessionState::NotVerified
                | SessionState::Failed
                | SessionState::Cancelled
        )
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Idle => "idle",
            SessionState::ChallengeRequested => "challenge_requested",
            SessionState::AwaitingCode => "awaiting_code",
            SessionState::Submitted => "submitted",
            SessionState::Verified => "verified",
            SessionState::NotVerified => "not_verified",
            SessionState::Failed => "failed",
            SessionState::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// How a full run of the session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The code was submitted and the service returned a verdict
    Completed(VerificationOutcome),
    /// The user declined to enter a code; nothing was submitted
    Cancelled,
}

/// One mobile number verification attempt
///
/// Calls are strictly sequential: every operation takes `&mut self`, so a
/// session can never have two calls in flight. A session issues at most one
/// challenge and accepts exactly one response to it.
pub struct VerificationSession<C: KycClient + ?Sized> {
    client: Arc<C>,
    progress: Arc<dyn ProgressReporter>,
    prompt_title: String,
    state: SessionState,
    request: Option<VerificationRequest>,
    issued_reference: Option<String>,
    consumed: bool,
}

impl<C: KycClient + ?Sized> VerificationSession<C> {
    pub fn new(client: Arc<C>, progress: Arc<dyn ProgressReporter>) -> Self {
        Self {
            client,
            progress,
            prompt_title: OTP_PROMPT_TITLE.to_string(),
            state: SessionState::Idle,
            request: None,
            issued_reference: None,
            consumed: false,
        }
    }

    pub fn with_prompt_title(mut self, title: impl Into<String>) -> Self {
        self.prompt_title = title.into();
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn request(&self) -> Option<&VerificationRequest> {
        self.request.as_ref()
    }

    fn expect_state(&self, expected: SessionState) -> KycResult<()> {
        if self.state != expected {
            return Err(KycError::SessionState {
                expected: expected.to_string(),
                actual: self.state.to_string(),
            });
        }
        Ok(())
    }

    /// Ask the service to send an OTP to the request's mobile number
    ///
    /// A blank mobile number fails with `InputMissing` and leaves the session
    /// `Idle`. Any other failure is terminal.
    pub async fn request_challenge(
        &mut self,
        request: VerificationRequest,
    ) -> KycResult<ChallengeHandle> {
        self.expect_state(SessionState::Idle)?;
        let call = plan_generate_otp(&request)?;
        let masked = mask_phone_number(request.subject_identifier());

        self.state = SessionState::ChallengeRequested;
        self.request = Some(request);

        let response = match invoke(self.client.as_ref(), self.progress.as_ref(), call).await {
            Ok(response) => response,
            Err(e) => {
                self.state = SessionState::Failed;
                tracing::error!(
                    phone = %masked,
                    error = %e,
                    event = "otp_challenge_failed",
                    "OTP challenge request failed"
                );
                return Err(e);
            }
        };

        let Some(reference) = challenge_reference(&response) else {
            self.state = SessionState::Failed;
            tracing::warn!(
                phone = %masked,
                event = "otp_reference_missing",
                "OTP challenge returned no reference"
            );
            return Err(KycError::MissingChallengeToken);
        };

        self.issued_reference = Some(reference.to_string());
        self.state = SessionState::AwaitingCode;
        self.progress.alert(&UserMessage::info(OTP_SENT_MESSAGE));

        tracing::info!(
            phone = %masked,
            event = "otp_challenge_issued",
            "OTP sent for mobile verification"
        );

        Ok(ChallengeHandle::from_reference(reference))
    }

    /// Ask the user for the code once
    ///
    /// Returns `None` and moves the session to `Cancelled` when the user
    /// declines.
    pub async fn collect_response_code(
        &mut self,
        prompt: &dyn CodePrompt,
    ) -> KycResult<Option<String>> {
        self.expect_state(SessionState::AwaitingCode)?;

        match prompt.request_code(&self.prompt_title).await {
            Some(code) => Ok(Some(code)),
            None => {
                self.state = SessionState::Cancelled;
                tracing::info!(event = "otp_entry_cancelled", "OTP entry cancelled");
                Ok(None)
            }
        }
    }

    fn check_handle(&self, handle: &ChallengeHandle) -> KycResult<()> {
        match self.issued_reference.as_deref() {
            Some(issued) if issued == handle.reference_id() => {
                if self.consumed {
                    Err(KycError::HandleConsumed)
                } else {
                    Ok(())
                }
            }
            _ => Err(KycError::ForeignHandle),
        }
    }

    /// Submit the user's code for the challenge this session issued
    ///
    /// Handle and code are checked before any call: a foreign or consumed
    /// handle, or a blank code, is rejected and the session is unchanged.
    pub async fn submit_response(
        &mut self,
        handle: ChallengeHandle,
        code: &str,
    ) -> KycResult<VerificationOutcome> {
        self.check_handle(&handle)?;
        self.expect_state(SessionState::AwaitingCode)?;

        let request = self.request.as_ref().ok_or_else(|| KycError::Internal {
            message: "session awaiting code without a request".to_string(),
        })?;
        let call = plan_submit_otp(request, handle.reference_id(), code)?;
        let masked = mask_phone_number(request.subject_identifier());

        self.consumed = true;
        self.state = SessionState::Submitted;

        let response = match invoke(self.client.as_ref(), self.progress.as_ref(), call).await {
            Ok(response) => response,
            Err(e) => {
                self.state = SessionState::Failed;
                tracing::error!(
                    phone = %masked,
                    error = %e,
                    event = "otp_submit_failed",
                    "OTP submission failed"
                );
                return Err(e);
            }
        };

        if otp_verified(&response) {
            self.state = SessionState::Verified;
            tracing::info!(
                phone = %masked,
                event = "mobile_verified",
                "Mobile number verified"
            );
            Ok(VerificationOutcome::verified(MOBILE_VERIFIED_MESSAGE))
        } else {
            self.state = SessionState::NotVerified;
            tracing::warn!(
                phone = %masked,
                event = "mobile_not_verified",
                "OTP verification returned a negative verdict"
            );
            Ok(VerificationOutcome::not_verified(OTP_FAILED_MESSAGE))
        }
    }

    /// Run the whole flow: challenge, prompt, submit
    pub async fn verify(
        &mut self,
        request: VerificationRequest,
        prompt: &dyn CodePrompt,
    ) -> KycResult<SessionOutcome> {
        let handle = self.request_challenge(request).await?;

        let Some(code) = self.collect_response_code(prompt).await? else {
            return Ok(SessionOutcome::Cancelled);
        };

        let outcome = self.submit_response(handle, &code).await?;
        Ok(SessionOutcome::Completed(outcome))
    }
}
