//! Remote procedures offered by the verification service.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    GenerateOtp,
    SubmitOtp,
    VerifyAadhaar,
    VerifyAadhaarOcr,
    VerifyPan,
    VerifyDrivingLicense,
    ExtractDrivingLicense,
    VerifyUpi,
    VerifyBankAccount,
    VerifyVehicleRc,
}

impl Endpoint {
    /// Path relative to the connector base URL
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::GenerateOtp => "/phone/generateOtp",
            Endpoint::SubmitOtp => "/phone/getNumberDetails",
            Endpoint::VerifyAadhaar => "/aadhaar/verify",
            Endpoint::VerifyAadhaarOcr => "/aadhaar/extraction",
            Endpoint::VerifyPan => "/pan/verify",
            Endpoint::VerifyDrivingLicense => "/dl_/verification",
            Endpoint::ExtractDrivingLicense => "/dl_number/based_search",
            Endpoint::VerifyUpi => "/bankAccountVerification/upiVerifications",
            Endpoint::VerifyBankAccount => "/bankaccountverifications/advancedverification",
            Endpoint::VerifyVehicleRc => "/vehicle/detailedsearches",
        }
    }

    /// Name used in request logs
    pub fn api_name(&self) -> &'static str {
        match self {
            Endpoint::GenerateOtp => "Generate OTP",
            Endpoint::SubmitOtp => "Submit OTP",
            Endpoint::VerifyAadhaar => "Verify Aadhaar",
            Endpoint::VerifyAadhaarOcr => "Verify Aadhaar - OCR",
            Endpoint::VerifyPan => "Verify PAN",
            Endpoint::VerifyDrivingLicense => "Verify Driving License",
            Endpoint::ExtractDrivingLicense => "Verify Driving License Details",
            Endpoint::VerifyUpi => "Verify UPI",
            Endpoint::VerifyBankAccount => "Verify Bank Account",
            Endpoint::VerifyVehicleRc => "Verify Vehicle RC",
        }
    }

    /// Message shown while the call is in flight
    pub fn busy_message(&self) -> &'static str {
        match self {
            Endpoint::GenerateOtp => "Verifying....",
            Endpoint::SubmitOtp => "Verifying OTP",
            Endpoint::VerifyAadhaar => "Verifying Aadhaar Number",
            Endpoint::VerifyAadhaarOcr => "Verifying Aadhaar OCR",
            Endpoint::VerifyPan => "Verifying PAN",
            Endpoint::VerifyDrivingLicense => "Verifying Driving License...",
            Endpoint::ExtractDrivingLicense => "Fetching Driving License Details...",
            Endpoint::VerifyUpi => "Verifying UPI ID",
            Endpoint::VerifyBankAccount => "Verifying Bank Account...",
            Endpoint::VerifyVehicleRc => "Verifying Vehicle RC...",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_name())
    }
}
