//! Form trigger dispatch
//!
//! A trigger is handled in three steps: plan a call from the record
//! snapshot, run it, and interpret the response into effects. Planning and
//! interpretation are pure; only the middle step talks to the service.

use serde_json::Value;
use std::sync::Arc;

use kyc_shared::phone::{mask_identifier, mask_phone_number};

use super::config::KycServiceConfig;
use super::planner::{self, mobile_request};
use super::session::{SessionOutcome, VerificationSession};
use super::traits::{invoke, CodePrompt, KycClient, ProgressReporter};
use super::verdict::*;
use crate::domain::entities::{Record, VerifiableRecord};
use crate::domain::events::FormTrigger;
use crate::domain::value_objects::{Effect, UserMessage, VerificationFlag, VerificationOutcome};
use crate::errors::{KycError, KycResult};

pub const AADHAAR_VERIFIED_MESSAGE: &str = "Aadhaar Number Verification Successfull";
pub const AADHAAR_FAILED_MESSAGE: &str = "Aadhaar Number Verification Failed";
pub const AADHAAR_OCR_VERIFIED_MESSAGE: &str = "Aadhaar Number Verified Successfully";
pub const AADHAAR_OCR_FAILED_MESSAGE: &str = "Aadhaar OCR Verification Failed";
pub const PAN_VERIFIED_MESSAGE: &str = "PAN Verified Successfully";
pub const PAN_FAILED_MESSAGE: &str = "PAN Verification Failed";
pub const DRIVING_LICENSE_VERIFIED_MESSAGE: &str = "Driving License Verified Successfully";
pub const DRIVING_LICENSE_FAILED_MESSAGE: &str = "Driving License Verification Failed";
pub const UPI_VERIFIED_MESSAGE: &str = "UPI ID Verified Successfully";
pub const UPI_FAILED_MESSAGE: &str = "UPI ID Verification Failed";
pub const BANK_ACCOUNT_VERIFIED_MESSAGE: &str = "Bank Account Verified Successfully";
pub const BANK_ACCOUNT_FAILED_MESSAGE: &str = "Bank Account Verification Failed";

fn verdict_effects(
    flag: VerificationFlag,
    verified: bool,
    success: &str,
    failure: &str,
) -> Vec<Effect> {
    if verified {
        vec![
            Effect::set_flag(flag),
            Effect::message(UserMessage::success(success)),
        ]
    } else {
        vec![Effect::message(UserMessage::failure(failure))]
    }
}

fn outcome_effects(flag: VerificationFlag, outcome: &VerificationOutcome) -> Vec<Effect> {
    let message = if outcome.verified {
        UserMessage::success(outcome.message.as_str())
    } else {
        UserMessage::failure(outcome.message.as_str())
    };
    let mut effects = Vec::with_capacity(2);
    if outcome.verified {
        effects.push(Effect::set_flag(flag));
    }
    effects.push(Effect::message(message));
    effects
}

fn driving_license_effects(response: &Value) -> Vec<Effect> {
    let Some(result) = result_of(response) else {
        return vec![Effect::message(UserMessage::failure(
            DRIVING_LICENSE_FAILED_MESSAGE,
        ))];
    };

    let verdict = driving_license_verdict(result);
    let mut effects = Vec::with_capacity(3);
    if verdict.verified {
        if let Some(date) = verdict.expiry_date {
            effects.push(Effect::SetExpiryDate { date });
        }
        effects.push(Effect::set_flag(VerificationFlag::DrivingLicenseVerified));
    }

    let message = match (verdict.message, verdict.verified) {
        (Some(text), true) => UserMessage::success(text),
        (Some(text), false) => UserMessage::failure(text),
        (None, true) => UserMessage::success(DRIVING_LICENSE_VERIFIED_MESSAGE),
        (None, false) => UserMessage::failure(DRIVING_LICENSE_FAILED_MESSAGE),
    };
    effects.push(Effect::message(message));
    effects
}

/// Map a service response to the effects of a trigger
///
/// A response without a `result` always reads as a negative verdict.
pub fn interpret(trigger: FormTrigger, response: &Value) -> Vec<Effect> {
    let result = result_of(response);
    let flag = trigger.flag();

    match trigger {
        FormTrigger::VerifyMobile => verdict_effects(
            flag,
            otp_verified(response),
            super::session::MOBILE_VERIFIED_MESSAGE,
            super::session::OTP_FAILED_MESSAGE,
        ),
        FormTrigger::VerifyAadhaar => verdict_effects(
            flag,
            result.map_or(false, aadhaar_verified),
            AADHAAR_VERIFIED_MESSAGE,
            AADHAAR_FAILED_MESSAGE,
        ),
        FormTrigger::VerifyAadhaarOcr => verdict_effects(
            flag,
            aadhaar_ocr_verified(response),
            AADHAAR_OCR_VERIFIED_MESSAGE,
            AADHAAR_OCR_FAILED_MESSAGE,
        ),
        FormTrigger::VerifyPan => verdict_effects(
            flag,
            result.map_or(false, pan_verified),
            PAN_VERIFIED_MESSAGE,
            PAN_FAILED_MESSAGE,
        ),
        FormTrigger::VerifyDrivingLicense => driving_license_effects(response),
        FormTrigger::VerifyUpi => verdict_effects(
            flag,
            result.map_or(false, upi_verified),
            UPI_VERIFIED_MESSAGE,
            UPI_FAILED_MESSAGE,
        ),
        FormTrigger::VerifyBankAccount => verdict_effects(
            flag,
            result.map_or(false, bank_account_verified),
            BANK_ACCOUNT_VERIFIED_MESSAGE,
            BANK_ACCOUNT_FAILED_MESSAGE,
        ),
    }
}

/// The identifier a trigger verifies, masked for logs
fn masked_subject(trigger: FormTrigger, record: &Record) -> String {
    let subject = match (trigger, record) {
        (FormTrigger::VerifyMobile, Record::Employee(e)) => {
            return e
                .mobile_number
                .as_deref()
                .map(mask_phone_number)
                .unwrap_or_default();
        }
        (FormTrigger::VerifyAadhaar, Record::Employee(e)) => e.aadhaar_number.as_deref(),
        (FormTrigger::VerifyPan, Record::Employee(e)) => e.pan.as_deref(),
        (FormTrigger::VerifyDrivingLicense, Record::Driver(d)) => d.license_number.as_deref(),
        (FormTrigger::VerifyUpi, Record::BankAccount(a)) => a.upi_id.as_deref(),
        (FormTrigger::VerifyBankAccount, Record::BankAccount(a)) => a.account_number.as_deref(),
        _ => None,
    };
    subject.map(mask_identifier).unwrap_or_default()
}

/// Routes form triggers to their verification flows
pub struct KycDispatcher<C: KycClient + ?Sized> {
    client: Arc<C>,
    progress: Arc<dyn ProgressReporter>,
    config: KycServiceConfig,
}

impl<C: KycClient + ?Sized> KycDispatcher<C> {
    pub fn new(
        client: Arc<C>,
        progress: Arc<dyn ProgressReporter>,
        config: KycServiceConfig,
    ) -> Self {
        Self {
            client,
            progress,
            config,
        }
    }

    pub fn config(&self) -> &KycServiceConfig {
        &self.config
    }

    /// A fresh OTP session sharing this dispatcher's client and reporter
    pub fn session(&self) -> VerificationSession<C> {
        VerificationSession::new(self.client.clone(), self.progress.clone())
            .with_prompt_title(self.config.otp_prompt_title.as_str())
    }

    /// Compute the effects of a trigger without touching the record
    ///
    /// `prompt` is only used by mobile verification. A cancelled code entry
    /// yields no effects.
    pub async fn evaluate(
        &self,
        trigger: FormTrigger,
        record: &Record,
        prompt: &dyn CodePrompt,
    ) -> KycResult<Vec<Effect>> {
        if record.doctype() != trigger.doctype() {
            return Err(KycError::UnsupportedTrigger {
                trigger: trigger.to_string(),
                record: record.doctype().to_string(),
            });
        }

        if trigger == FormTrigger::VerifyMobile {
            return self.verify_mobile(record, prompt).await;
        }

        let call = planner::plan(trigger, record, &self.config)?;
        let response = invoke(self.client.as_ref(), self.progress.as_ref(), call).await?;
        Ok(interpret(trigger, &response))
    }

    async fn verify_mobile(
        &self,
        record: &Record,
        prompt: &dyn CodePrompt,
    ) -> KycResult<Vec<Effect>> {
        let Record::Employee(employee) = record else {
            return Err(KycError::UnsupportedTrigger {
                trigger: FormTrigger::VerifyMobile.to_string(),
                record: record.doctype().to_string(),
            });
        };

        let request = mobile_request(employee, &self.config)?;
        match self.session().verify(request, prompt).await? {
            SessionOutcome::Completed(outcome) => {
                Ok(outcome_effects(VerificationFlag::MobileVerified, &outcome))
            }
            SessionOutcome::Cancelled => Ok(Vec::new()),
        }
    }

    /// Run a trigger and apply its effects to the record
    ///
    /// Flags are only ever set; a negative verdict leaves an earlier `true`
    /// in place.
    pub async fn handle(
        &self,
        trigger: FormTrigger,
        record: &mut Record,
        prompt: &dyn CodePrompt,
    ) -> KycResult<Vec<Effect>> {
        let subject = masked_subject(trigger, record);
        let effects = match self.evaluate(trigger, record, prompt).await {
            Ok(effects) => effects,
            Err(e) => {
                tracing::warn!(
                    trigger = %trigger,
                    doctype = record.doctype(),
                    subject = %subject,
                    error = %e,
                    event = "verification_failed",
                    "Verification did not complete"
                );
                return Err(e);
            }
        };

        let applied = record.apply_effects(&effects);
        tracing::info!(
            trigger = %trigger,
            doctype = record.doctype(),
            subject = %subject,
            effects = effects.len(),
            applied = applied,
            event = "verification_completed",
            "Verification completed"
        );
        Ok(effects)
    }

    /// Look up a driving license by number and date of birth
    ///
    /// Returns the service's `result` unchanged, or `Value::Null` when it
    /// returned none.
    pub async fn extract_driving_license(
        &self,
        license_number: &str,
        date_of_birth: Option<chrono::NaiveDate>,
    ) -> KycResult<Value> {
        let call = planner::plan_driving_license_lookup(license_number, date_of_birth)?;
        let response = invoke(self.client.as_ref(), self.progress.as_ref(), call).await?;
        Ok(response.get("result").cloned().unwrap_or(Value::Null))
    }

    /// Detailed registration certificate search for a vehicle
    pub async fn verify_vehicle_rc(&self, vehicle_number: &str) -> KycResult<Value> {
        let call = planner::plan_vehicle_rc(vehicle_number)?;
        let response = invoke(self.client.as_ref(), self.progress.as_ref(), call).await?;
        Ok(response.get("result").cloned().unwrap_or(Value::Null))
    }
}
