//! Inputs and outputs of a single verification attempt.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Subject of a mobile number verification
///
/// Immutable once created; a new request is built for every user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    subject_identifier: String,
    country_code: String,
}

impl VerificationRequest {
    pub fn new(subject_identifier: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            subject_identifier: subject_identifier.into(),
            country_code: country_code.into(),
        }
    }

    /// The identifier being verified (a mobile number)
    pub fn subject_identifier(&self) -> &str {
        &self.subject_identifier
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }
}

/// Reference token issued by the service for one OTP challenge
///
/// Deliberately not `Clone`: submitting a response consumes the handle.
#[derive(Debug, PartialEq, Eq)]
pub struct ChallengeHandle {
    reference_id: String,
}

impl ChallengeHandle {
    /// Rebuild a handle from a reference that travelled through the host UI
    ///
    /// Sessions only accept references they issued themselves.
    pub fn from_reference(reference_id: impl Into<String>) -> Self {
        Self {
            reference_id: reference_id.into(),
        }
    }

    pub fn reference_id(&self) -> &str {
        &self.reference_id
    }
}

/// Final verdict of a completed verification call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationOutcome {
    pub verified: bool,
    /// Human readable result, surfaced to the caller unchanged
    pub message: String,
}

impl VerificationOutcome {
    pub fn verified(message: impl Into<String>) -> Self {
        Self {
            verified: true,
            message: message.into(),
        }
    }

    pub fn not_verified(message: impl Into<String>) -> Self {
        Self {
            verified: false,
            message: message.into(),
        }
    }
}

/// Boolean verification attributes carried by host records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationFlag {
    MobileVerified,
    AadhaarVerified,
    AadhaarOcrVerified,
    PanVerified,
    DrivingLicenseVerified,
    UpiVerified,
    BankAccountVerified,
}

impl VerificationFlag {
    /// Field name of the flag on the host record
    pub fn field_name(&self) -> &'static str {
        match self {
            VerificationFlag::MobileVerified => "custom_is_mobile_no_verified",
            VerificationFlag::AadhaarVerified => "custom_is_aadhar_verified",
            VerificationFlag::AadhaarOcrVerified => "custom_is_aadhar_ocr_verified",
            VerificationFlag::PanVerified => "custom_is_pan_verified",
            VerificationFlag::DrivingLicenseVerified => "custom_driving_license_verified",
            VerificationFlag::UpiVerified => "custom_is_upi_verified",
            VerificationFlag::BankAccountVerified => "is_bank_account_verified",
        }
    }
}

impl fmt::Display for VerificationFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}
