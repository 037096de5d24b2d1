//! Form triggers: the named buttons a host fires verification flows from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::value_objects::VerificationFlag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormTrigger {
    VerifyMobile,
    VerifyAadhaar,
    VerifyAadhaarOcr,
    VerifyPan,
    VerifyDrivingLicense,
    VerifyUpi,
    VerifyBankAccount,
}

impl FormTrigger {
    pub const ALL: [FormTrigger; 7] = [
        FormTrigger::VerifyMobile,
        FormTrigger::VerifyAadhaar,
        FormTrigger::VerifyAadhaarOcr,
        FormTrigger::VerifyPan,
        FormTrigger::VerifyDrivingLicense,
        FormTrigger::VerifyUpi,
        FormTrigger::VerifyBankAccount,
    ];

    /// Button field name on the host form
    pub fn field_name(&self) -> &'static str {
        match self {
            FormTrigger::VerifyMobile => "custom_verify_mobile",
            FormTrigger::VerifyAadhaar => "custom_verify_aadhar",
            FormTrigger::VerifyAadhaarOcr => "custom_verify_aadhaar_ocr",
            FormTrigger::VerifyPan => "custom_verify_pan",
            FormTrigger::VerifyDrivingLicense => "custom_verify_driving_license",
            FormTrigger::VerifyUpi => "custom_verify_upi_id",
            FormTrigger::VerifyBankAccount => "custom_verify_bank_account",
        }
    }

    /// Record type the trigger lives on
    pub fn doctype(&self) -> &'static str {
        match self {
            FormTrigger::VerifyMobile
            | FormTrigger::VerifyAadhaar
            | FormTrigger::VerifyAadhaarOcr
            | FormTrigger::VerifyPan => "Employee",
            FormTrigger::VerifyDrivingLicense => "Driver",
            FormTrigger::VerifyUpi | FormTrigger::VerifyBankAccount => "Bank Account",
        }
    }

    /// The flag a positive verdict sets
    pub fn flag(&self) -> VerificationFlag {
        match self {
            FormTrigger::VerifyMobile => VerificationFlag::MobileVerified,
            FormTrigger::VerifyAadhaar => VerificationFlag::AadhaarVerified,
            FormTrigger::VerifyAadhaarOcr => VerificationFlag::AadhaarOcrVerified,
            FormTrigger::VerifyPan => VerificationFlag::PanVerified,
            FormTrigger::VerifyDrivingLicense => VerificationFlag::DrivingLicenseVerified,
            FormTrigger::VerifyUpi => VerificationFlag::UpiVerified,
            FormTrigger::VerifyBankAccount => VerificationFlag::BankAccountVerified,
        }
    }
}

impl fmt::Display for FormTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for FormTrigger {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormTrigger::ALL
            .into_iter()
            .find(|trigger| trigger.field_name() == s)
            .ok_or_else(|| format!("Unknown form trigger: {}", s))
    }
}
