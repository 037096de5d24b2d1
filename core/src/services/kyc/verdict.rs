//! Verdict rules, one per endpoint.
//!
//! The service answers each endpoint in its own vocabulary ("true" as a
//! string, "E"/"Y" codes, "yes"/"success"). The rules compare those literals
//! exactly and never coerce them to native booleans, so `"True"` or a JSON
//! `true` where a string is expected reads as a negative verdict.

use chrono::NaiveDate;
use serde_json::Value;

use kyc_shared::date::parse_service_date;

/// `verified` value of a positive Aadhaar number verdict
pub const AADHAAR_VERIFIED: &str = "true";
/// `verified` value of a positive UPI verdict
pub const UPI_VERIFIED: &str = "true";
/// `panStatus` of an existing, valid PAN
pub const PAN_STATUS_EXISTING: &str = "E";
/// `name` / `dob` value when the submitted field matches the PAN record
pub const PAN_FIELD_MATCHED: &str = "Y";
/// `active` value of an active bank account
pub const BANK_ACCOUNT_ACTIVE: &str = "yes";
/// `reason` value of a successful bank account verification
pub const BANK_ACCOUNT_REASON_SUCCESS: &str = "success";

/// Whether a JSON value carries anything: `null`, `false`, `0`, `""`, `{}`
/// and `[]` do not
pub fn has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Whether a JSON value is truthy: only `null`, `false`, `0` and `""` are not,
/// so an empty object or array still counts
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Array(_) | Value::Object(_) => true,
        other => has_content(other),
    }
}

/// The `result` object of a service response, if it carries anything
pub fn result_of(response: &Value) -> Option<&Value> {
    response.get("result").filter(|result| has_content(result))
}

fn field_equals(result: &Value, key: &str, literal: &str) -> bool {
    result.get(key).and_then(Value::as_str) == Some(literal)
}

/// Reference id issued by `generate_otp`, if any
pub fn challenge_reference(response: &Value) -> Option<&str> {
    result_of(response)
        .and_then(|result| result.get("referenceId"))
        .and_then(Value::as_str)
        .filter(|reference| !reference.trim().is_empty())
}

/// `submit_otp` succeeds when the service returns a truthy result
///
/// Unlike OCR, an empty `{}` result still verifies.
pub fn otp_verified(response: &Value) -> bool {
    response.get("result").map_or(false, is_truthy)
}

pub fn aadhaar_verified(result: &Value) -> bool {
    field_equals(result, "verified", AADHAAR_VERIFIED)
}

/// OCR extraction has no verdict field: a non-empty result is a pass
pub fn aadhaar_ocr_verified(response: &Value) -> bool {
    result_of(response).is_some()
}

pub fn pan_verified(result: &Value) -> bool {
    field_equals(result, "panStatus", PAN_STATUS_EXISTING)
        && field_equals(result, "dob", PAN_FIELD_MATCHED)
        && field_equals(result, "name", PAN_FIELD_MATCHED)
}

pub fn upi_verified(result: &Value) -> bool {
    field_equals(result, "verified", UPI_VERIFIED)
}

pub fn bank_account_verified(result: &Value) -> bool {
    field_equals(result, "active", BANK_ACCOUNT_ACTIVE)
        && field_equals(result, "reason", BANK_ACCOUNT_REASON_SUCCESS)
}

/// Driving license verdict with the details the service returns alongside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrivingLicenseVerdict {
    pub verified: bool,
    /// `moreInfo.expiryDate`, when present and parseable
    pub expiry_date: Option<NaiveDate>,
    /// The service's own description of the result
    pub message: Option<String>,
}

/// Unlike the string verdicts, `verified` here is a JSON boolean
pub fn driving_license_verdict(result: &Value) -> DrivingLicenseVerdict {
    let verified = result.get("verified").and_then(Value::as_bool) == Some(true);

    let expiry_date = result
        .get("moreInfo")
        .and_then(|info| info.get("expiryDate"))
        .and_then(Value::as_str)
        .and_then(parse_service_date);

    let message = result
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string);

    DrivingLicenseVerdict {
        verified,
        expiry_date,
        message,
    }
}
