//! Request bodies for each endpoint, in the service's field vocabulary.

use serde::Serialize;
use serde_json::Value;

use super::endpoint::Endpoint;
use crate::errors::{KycError, KycResult};

/// A fully prepared remote call: endpoint plus JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCall {
    pub endpoint: Endpoint,
    pub payload: Value,
}

impl ServiceCall {
    pub fn new<P: Serialize>(endpoint: Endpoint, payload: &P) -> KycResult<Self> {
        let payload = serde_json::to_value(payload).map_err(|e| KycError::Internal {
            message: format!("Failed to encode {} payload: {}", endpoint, e),
        })?;
        Ok(Self { endpoint, payload })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOtpPayload<'a> {
    pub country_code: &'a str,
    pub mobile_number: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOtpPayload<'a> {
    pub country_code: &'a str,
    pub mobile_number: &'a str,
    pub reference_id: &'a str,
    pub otp: &'a str,
    pub extra_fields: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AadhaarPayload<'a> {
    pub uid: &'a str,
}

/// Absolute URLs of the card's front and back images
#[derive(Debug, Clone, Serialize)]
pub struct AadhaarOcrPayload {
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PanPayload<'a> {
    pub pan: &'a str,
    pub name: &'a str,
    /// `DD/MM/YYYY`
    pub dob: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrivingLicensePayload<'a> {
    pub number: &'a str,
    pub dob: String,
    pub issue_date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DrivingLicenseLookupPayload<'a> {
    pub number: &'a str,
    pub dob: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpiPayload<'a> {
    pub vpa: &'a str,
    pub name: &'a str,
    pub fuzzy: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountPayload<'a> {
    pub beneficiary_account: &'a str,
    #[serde(rename = "beneficiaryIFSC")]
    pub beneficiary_ifsc: &'a str,
    pub beneficiary_mobile: &'a str,
    pub beneficiary_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
}

/// The service expects these switches as strings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRcPayload<'a> {
    pub vehicle_number: &'a str,
    pub blacklist_check: &'static str,
    pub split_address: &'static str,
}

impl<'a> VehicleRcPayload<'a> {
    pub fn new(vehicle_number: &'a str) -> Self {
        Self {
            vehicle_number,
            blacklist_check: "true",
            split_address: "true",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_submit_otp_field_names() {
        let call = ServiceCall::new(
            Endpoint::SubmitOtp,
            &SubmitOtpPayload {
                country_code: "91",
                mobile_number: "9876543210",
                reference_id: "ref-1",
                otp: "123456",
                extra_fields: false,
            },
        )
        .unwrap();

        assert_eq!(
            call.payload,
            json!({
                "countryCode": "91",
                "mobileNumber": "9876543210",
                "referenceId": "ref-1",
                "otp": "123456",
                "extraFields": false
            })
        );
    }

    #[test]
    fn test_bank_account_field_names_and_optional_email() {
        let payload = BankAccountPayload {
            beneficiary_account: "001122334455",
            beneficiary_ifsc: "HDFC0001234",
            beneficiary_mobile: "9876543210",
            beneficiary_name: "Asha Rao",
            email: None,
        };
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({
                "beneficiaryAccount": "001122334455",
                "beneficiaryIFSC": "HDFC0001234",
                "beneficiaryMobile": "9876543210",
                "beneficiaryName": "Asha Rao"
            })
        );

        let with_email = BankAccountPayload {
            email: Some("asha@example.com"),
            ..payload
        };
        assert_eq!(
            serde_json::to_value(&with_email).unwrap()["email"],
            json!("asha@example.com")
        );
    }

    #[test]
    fn test_vehicle_rc_switches_are_strings() {
        let value = serde_json::to_value(VehicleRcPayload::new("KA01AB1234")).unwrap();
        assert_eq!(
            value,
            json!({"vehicleNumber": "KA01AB1234", "blacklistCheck": "true", "splitAddress": "true"})
        );
    }
}
