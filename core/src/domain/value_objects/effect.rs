//! Side effects produced by verification flows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::verification::VerificationFlag;

/// How a host should present a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Info,
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMessage {
    pub text: String,
    pub indicator: Indicator,
}

impl UserMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            indicator: Indicator::Info,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            indicator: Indicator::Success,
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            indicator: Indicator::Failure,
        }
    }
}

/// A change a verification flow asks the host to make
///
/// Flags are set-only: there is no effect that clears one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    SetFlag { flag: VerificationFlag },
    SetExpiryDate { date: NaiveDate },
    Message { message: UserMessage },
}

impl Effect {
    pub fn set_flag(flag: VerificationFlag) -> Self {
        Effect::SetFlag { flag }
    }

    pub fn message(message: UserMessage) -> Self {
        Effect::Message { message }
    }
}
