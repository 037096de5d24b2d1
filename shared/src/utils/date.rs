//! Date conversion between record format and service format

use chrono::NaiveDate;

/// Date format used by host records
pub const RECORD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date format expected by the verification service
pub const SERVICE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Format a record date for the verification service (`DD/MM/YYYY`)
pub fn to_service_date(date: NaiveDate) -> String {
    date.format(SERVICE_DATE_FORMAT).to_string()
}

/// Parse a date returned by the verification service
///
/// The service is not consistent across endpoints, so `DD/MM/YYYY`,
/// `DD-MM-YYYY` and ISO dates (optionally with a time part) are accepted.
pub fn parse_service_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date_part = value.split(['T', ' ']).next().unwrap_or(value);

    NaiveDate::parse_from_str(date_part, SERVICE_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%d-%m-%Y"))
        .or_else(|_| NaiveDate::parse_from_str(date_part, RECORD_DATE_FORMAT))
        .ok()
}
