//! Turn record snapshots into service calls.
//!
//! Every plan checks its required fields first, so a missing input fails
//! with `InputMissing` before any call is made.

use chrono::NaiveDate;

use kyc_shared::date::to_service_date;
use kyc_shared::url::absolute_file_url;
use kyc_shared::validation::is_valid_aadhaar_number;

use super::config::KycServiceConfig;
use super::endpoint::Endpoint;
use super::payload::*;
use crate::domain::entities::{BankAccountRecord, DriverRecord, EmployeeRecord, Record, VerifiableRecord};
use crate::domain::events::FormTrigger;
use crate::domain::value_objects::VerificationRequest;
use crate::errors::{KycError, KycResult};

fn required<'a>(value: Option<&'a str>, field: &str) -> KycResult<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(KycError::input_missing(field)),
    }
}

fn required_date(value: Option<NaiveDate>, field: &str) -> KycResult<String> {
    value
        .map(to_service_date)
        .ok_or_else(|| KycError::input_missing(field))
}

/// Mobile verification request for an employee
pub fn mobile_request(
    employee: &EmployeeRecord,
    config: &KycServiceConfig,
) -> KycResult<VerificationRequest> {
    let mobile = required(employee.mobile_number.as_deref(), "Mobile Number")?;
    Ok(VerificationRequest::new(mobile, config.default_country_code.as_str()))
}

pub fn plan_generate_otp(request: &VerificationRequest) -> KycResult<ServiceCall> {
    let mobile_number = required(Some(request.subject_identifier()), "Mobile Number")?;
    let country_code = required(Some(request.country_code()), "Country Code")?;
    ServiceCall::new(
        Endpoint::GenerateOtp,
        &GenerateOtpPayload {
            country_code,
            mobile_number,
        },
    )
}

pub fn plan_submit_otp(
    request: &VerificationRequest,
    reference_id: &str,
    otp: &str,
) -> KycResult<ServiceCall> {
    let otp = required(Some(otp), "OTP")?;
    ServiceCall::new(
        Endpoint::SubmitOtp,
        &SubmitOtpPayload {
            country_code: request.country_code(),
            mobile_number: request.subject_identifier(),
            reference_id,
            otp,
            extra_fields: false,
        },
    )
}

pub fn plan_aadhaar(employee: &EmployeeRecord) -> KycResult<ServiceCall> {
    let uid = required(employee.aadhaar_number.as_deref(), "Aadhaar Number")?;
    if !is_valid_aadhaar_number(uid) {
        return Err(KycError::InvalidFormat {
            field: "Aadhaar Number".to_string(),
        });
    }
    ServiceCall::new(Endpoint::VerifyAadhaar, &AadhaarPayload { uid })
}

pub fn plan_aadhaar_ocr(employee: &EmployeeRecord, config: &KycServiceConfig) -> KycResult<ServiceCall> {
    let front = required(employee.aadhaar_front_image.as_deref(), "Aadhaar Card Front Image")?;
    let back = required(employee.aadhaar_back_image.as_deref(), "Aadhaar Card Back Image")?;
    ServiceCall::new(
        Endpoint::VerifyAadhaarOcr,
        &AadhaarOcrPayload {
            files: vec![
                absolute_file_url(&config.site_url, front),
                absolute_file_url(&config.site_url, back),
            ],
        },
    )
}

pub fn plan_pan(employee: &EmployeeRecord) -> KycResult<ServiceCall> {
    let pan = required(employee.pan.as_deref(), "PAN")?;
    let name = required(employee.employee_name.as_deref(), "Employee Name")?;
    let dob = required_date(employee.date_of_birth, "Date of Birth")?;
    ServiceCall::new(Endpoint::VerifyPan, &PanPayload { pan, name, dob })
}

pub fn plan_driving_license(driver: &DriverRecord) -> KycResult<ServiceCall> {
    let number = required(driver.license_number.as_deref(), "License Number")?;
    let dob = required_date(driver.date_of_birth, "Date of Birth")?;
    let issue_date = required_date(driver.issue_date, "Issuing Date")?;
    ServiceCall::new(
        Endpoint::VerifyDrivingLicense,
        &DrivingLicensePayload {
            number,
            dob,
            issue_date,
        },
    )
}

pub fn plan_driving_license_lookup(
    license_number: &str,
    date_of_birth: Option<NaiveDate>,
) -> KycResult<ServiceCall> {
    let number = required(Some(license_number), "License Number")?;
    let dob = required_date(date_of_birth, "Date of Birth")?;
    ServiceCall::new(
        Endpoint::ExtractDrivingLicense,
        &DrivingLicenseLookupPayload { number, dob },
    )
}

pub fn plan_upi(account: &BankAccountRecord) -> KycResult<ServiceCall> {
    let name = required(account.account_holder_name.as_deref(), "Account Holder Name")?;
    let vpa = required(account.upi_id.as_deref(), "UPI ID")?;
    ServiceCall::new(
        Endpoint::VerifyUpi,
        &UpiPayload {
            vpa,
            name,
            fuzzy: false,
        },
    )
}

pub fn plan_bank_account(account: &BankAccountRecord) -> KycResult<ServiceCall> {
    let beneficiary_account = required(account.account_number.as_deref(), "Bank Account No")?;
    let beneficiary_name = required(account.account_holder_name.as_deref(), "Account Holder Name")?;
    let beneficiary_ifsc = required(account.ifsc_code.as_deref(), "IFSC Code")?;
    let beneficiary_mobile = required(account.mobile_number.as_deref(), "Mobile Number")?;
    let email = account
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty());
    ServiceCall::new(
        Endpoint::VerifyBankAccount,
        &BankAccountPayload {
            beneficiary_account,
            beneficiary_ifsc,
            beneficiary_mobile,
            beneficiary_name,
            email,
        },
    )
}

pub fn plan_vehicle_rc(vehicle_number: &str) -> KycResult<ServiceCall> {
    let vehicle_number = required(Some(vehicle_number), "Vehicle Number")?;
    ServiceCall::new(Endpoint::VerifyVehicleRc, &VehicleRcPayload::new(vehicle_number))
}

/// Plan the single call of a one-shot trigger
///
/// `VerifyMobile` is a two-step flow and is planned by the session instead.
pub fn plan(trigger: FormTrigger, record: &Record, config: &KycServiceConfig) -> KycResult<ServiceCall> {
    match (trigger, record) {
        (FormTrigger::VerifyAadhaar, Record::Employee(employee)) => plan_aadhaar(employee),
        (FormTrigger::VerifyAadhaarOcr, Record::Employee(employee)) => plan_aadhaar_ocr(employee, config),
        (FormTrigger::VerifyPan, Record::Employee(employee)) => plan_pan(employee),
        (FormTrigger::VerifyDrivingLicense, Record::Driver(driver)) => plan_driving_license(driver),
        (FormTrigger::VerifyUpi, Record::BankAccount(account)) => plan_upi(account),
        (FormTrigger::VerifyBankAccount, Record::BankAccount(account)) => plan_bank_account(account),
        (trigger, record) => Err(KycError::UnsupportedTrigger {
            trigger: trigger.to_string(),
            record: record.doctype().to_string(),
        }),
    }
}
