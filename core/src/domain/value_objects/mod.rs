//! Value objects exchanged between verification flows and their callers.

pub mod effect;
pub mod verification;

pub use effect::{Effect, Indicator, UserMessage};
pub use verification::{
    ChallengeHandle, VerificationFlag, VerificationOutcome, VerificationRequest,
};
