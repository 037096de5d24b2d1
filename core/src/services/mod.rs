//! Business services containing verification flows.

pub mod kyc;
pub mod request_log;

// Re-export commonly used types
pub use kyc::{
    interpret, CodePrompt, Endpoint, KycClient, KycDispatcher, KycServiceConfig, NoopProgress,
    ProgressReporter, ServiceCall, SessionOutcome, SessionState, VerificationSession,
};
pub use request_log::{
    purge_expired_logs, CleanupResult, RequestLogCleanupConfig, RequestLogCleanupService,
};
