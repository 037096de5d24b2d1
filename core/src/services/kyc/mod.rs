//! Verification flows against the remote KYC service
//!
//! - `session`: the two-step OTP verification of a mobile number
//! - `planner` / `verdict`: pure mapping from records to calls and from
//!   responses to verdicts
//! - `dispatcher`: routes form triggers through plan, call and interpret,
//!   then applies the resulting effects to the record

mod config;
mod dispatcher;
mod endpoint;
mod payload;
pub mod planner;
mod session;
mod traits;
pub mod verdict;

#[cfg(test)]
mod tests;

pub use config::{KycServiceConfig, OTP_PROMPT_TITLE};
pub use dispatcher::*;
pub use endpoint::Endpoint;
pub use payload::*;
pub use session::{
    SessionOutcome, SessionState, VerificationSession, MOBILE_VERIFIED_MESSAGE,
    OTP_FAILED_MESSAGE, OTP_SENT_MESSAGE,
};
pub use traits::{CodePrompt, KycClient, NoopProgress, ProgressReporter};
