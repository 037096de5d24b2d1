//! Traits for the verification service, busy feedback and code entry

use async_trait::async_trait;
use serde_json::Value;

use super::endpoint::Endpoint;
use super::payload::ServiceCall;
use crate::domain::value_objects::UserMessage;
use crate::errors::KycResult;

/// Trait for verification service integration
#[async_trait]
pub trait KycClient: Send + Sync {
    /// Invoke an endpoint and return the decoded response body
    ///
    /// Non-success responses and transport failures are returned as
    /// `KycError::ServiceCallFailed`. Implementations must not retry.
    async fn call(&self, endpoint: Endpoint, payload: Value) -> KycResult<Value>;
}

/// Host-side feedback while a remote call is in flight
pub trait ProgressReporter: Send + Sync {
    /// A call is starting; show `message` as busy feedback
    fn begin(&self, message: &str);

    /// The call has returned
    fn end(&self);

    /// Transient notification that does not end the flow
    fn alert(&self, _message: &UserMessage) {}
}

/// Reporter for hosts without busy feedback
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn begin(&self, _message: &str) {}

    fn end(&self) {}
}

/// Trait for collecting a one-time code from the end user
#[async_trait]
pub trait CodePrompt: Send + Sync {
    /// Ask for a code; `None` means the user cancelled
    async fn request_code(&self, title: &str) -> Option<String>;
}

/// Run one prepared call, bracketed by busy feedback
///
/// `end` is reported whether or not the call succeeded.
pub(crate) async fn invoke<C: KycClient + ?Sized>(
    client: &C,
    progress: &dyn ProgressReporter,
    call: ServiceCall,
) -> KycResult<Value> {
    progress.begin(call.endpoint.busy_message());
    let result = client.call(call.endpoint, call.payload).await;
    progress.end();
    result
}
