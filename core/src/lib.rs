//! # KYC Core
//!
//! Verification flows for a remote KYC service: the OTP challenge session,
//! per-endpoint verdict rules and the trigger dispatcher that turns verdicts
//! into record effects. The transport is abstracted behind [`KycClient`];
//! the HTTP implementation lives in `kyc_infra`.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::{MockRequestLogRepository, NoOpRequestLogRepository, RequestLogRepository};
pub use services::{
    interpret, purge_expired_logs, CleanupResult, CodePrompt, Endpoint, KycClient, KycDispatcher,
    KycServiceConfig, NoopProgress, ProgressReporter, RequestLogCleanupConfig,
    RequestLogCleanupService, ServiceCall, SessionOutcome, SessionState, VerificationSession,
};
