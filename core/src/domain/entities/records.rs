//! Snapshots of the host records that carry verification flags.
//!
//! A snapshot holds the fields a verification flow reads and the flags it may
//! set. Flags only ever move from `false` to `true`; a negative verdict never
//! clears a flag set by an earlier verification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Effect, VerificationFlag};

/// Behaviour shared by all records that carry verification flags
pub trait VerifiableRecord {
    /// Host document type, e.g. "Employee"
    fn doctype(&self) -> &'static str;

    /// Current value of a flag, `None` if the record does not carry it
    fn flag(&self, flag: VerificationFlag) -> Option<bool>;

    /// Mutable slot for a flag, `None` if the record does not carry it
    fn flag_slot(&mut self, flag: VerificationFlag) -> Option<&mut bool>;

    /// Record the document's expiry date; records without one ignore it
    fn set_expiry_date(&mut self, _date: NaiveDate) -> bool {
        false
    }

    /// Apply effects to the snapshot, returning how many changed it
    fn apply_effects(&mut self, effects: &[Effect]) -> usize {
        let doctype = self.doctype();
        let mut applied = 0;
        for effect in effects {
            match effect {
                Effect::SetFlag { flag } => match self.flag_slot(*flag) {
                    Some(slot) => {
                        if !*slot {
                            *slot = true;
                            applied += 1;
                        }
                    }
                    None => {
                        tracing::warn!(
                            doctype = doctype,
                            flag = %flag,
                            "Ignoring flag not carried by record"
                        );
                    }
                },
                Effect::SetExpiryDate { date } => {
                    if self.set_expiry_date(*date) {
                        applied += 1;
                    }
                }
                Effect::Message { .. } => {}
            }
        }
        applied
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeRecord {
    pub employee_name: Option<String>,
    pub mobile_number: Option<String>,
    pub aadhaar_number: Option<String>,
    /// Host file URL of the Aadhaar card front image
    pub aadhaar_front_image: Option<String>,
    /// Host file URL of the Aadhaar card back image
    pub aadhaar_back_image: Option<String>,
    pub pan: Option<String>,
    pub date_of_birth: Option<NaiveDate>,

    pub mobile_verified: bool,
    pub aadhaar_verified: bool,
    pub aadhaar_ocr_verified: bool,
    pub pan_verified: bool,
}

impl VerifiableRecord for EmployeeRecord {
    fn doctype(&self) -> &'static str {
        "Employee"
    }

    fn flag(&self, flag: VerificationFlag) -> Option<bool> {
        match flag {
            VerificationFlag::MobileVerified => Some(self.mobile_verified),
            VerificationFlag::AadhaarVerified => Some(self.aadhaar_verified),
            VerificationFlag::AadhaarOcrVerified => Some(self.aadhaar_ocr_verified),
            VerificationFlag::PanVerified => Some(self.pan_verified),
            _ => None,
        }
    }

    fn flag_slot(&mut self, flag: VerificationFlag) -> Option<&mut bool> {
        match flag {
            VerificationFlag::MobileVerified => Some(&mut self.mobile_verified),
            VerificationFlag::AadhaarVerified => Some(&mut self.aadhaar_verified),
            VerificationFlag::AadhaarOcrVerified => Some(&mut self.aadhaar_ocr_verified),
            VerificationFlag::PanVerified => Some(&mut self.pan_verified),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverRecord {
    pub license_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,

    pub driving_license_verified: bool,
}

impl VerifiableRecord for DriverRecord {
    fn doctype(&self) -> &'static str {
        "Driver"
    }

    fn flag(&self, flag: VerificationFlag) -> Option<bool> {
        match flag {
            VerificationFlag::DrivingLicenseVerified => Some(self.driving_license_verified),
            _ => None,
        }
    }

    fn flag_slot(&mut self, flag: VerificationFlag) -> Option<&mut bool> {
        match flag {
            VerificationFlag::DrivingLicenseVerified => Some(&mut self.driving_license_verified),
            _ => None,
        }
    }

    fn set_expiry_date(&mut self, date: NaiveDate) -> bool {
        if self.expiry_date == Some(date) {
            return false;
        }
        self.expiry_date = Some(date);
        true
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankAccountRecord {
    pub account_number: Option<String>,
    pub account_holder_name: Option<String>,
    pub ifsc_code: Option<String>,
    pub mobile_number: Option<String>,
    pub upi_id: Option<String>,
    pub email: Option<String>,

    pub bank_account_verified: bool,
    pub upi_verified: bool,
}

impl VerifiableRecord for BankAccountRecord {
    fn doctype(&self) -> &'static str {
        "Bank Account"
    }

    fn flag(&self, flag: VerificationFlag) -> Option<bool> {
        match flag {
            VerificationFlag::BankAccountVerified => Some(self.bank_account_verified),
            VerificationFlag::UpiVerified => Some(self.upi_verified),
            _ => None,
        }
    }

    fn flag_slot(&mut self, flag: VerificationFlag) -> Option<&mut bool> {
        match flag {
            VerificationFlag::BankAccountVerified => Some(&mut self.bank_account_verified),
            VerificationFlag::UpiVerified => Some(&mut self.upi_verified),
            _ => None,
        }
    }
}

/// Any record a form trigger can be fired on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "doctype")]
pub enum Record {
    Employee(EmployeeRecord),
    Driver(DriverRecord),
    #[serde(rename = "Bank Account")]
    BankAccount(BankAccountRecord),
}

impl VerifiableRecord for Record {
    fn doctype(&self) -> &'static str {
        match self {
            Record::Employee(r) => r.doctype(),
            Record::Driver(r) => r.doctype(),
            Record::BankAccount(r) => r.doctype(),
        }
    }

    fn flag(&self, flag: VerificationFlag) -> Option<bool> {
        match self {
            Record::Employee(r) => r.flag(flag),
            Record::Driver(r) => r.flag(flag),
            Record::BankAccount(r) => r.flag(flag),
        }
    }

    fn flag_slot(&mut self, flag: VerificationFlag) -> Option<&mut bool> {
        match self {
            Record::Employee(r) => r.flag_slot(flag),
            Record::Driver(r) => r.flag_slot(flag),
            Record::BankAccount(r) => r.flag_slot(flag),
        }
    }

    fn set_expiry_date(&mut self, date: NaiveDate) -> bool {
        match self {
            Record::Driver(r) => r.set_expiry_date(date),
            _ => false,
        }
    }
}
