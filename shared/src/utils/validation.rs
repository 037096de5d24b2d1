//! Identity number validation

use once_cell::sync::Lazy;
use regex::Regex;

// 12 digits, first digit never 0 or 1
static AADHAAR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[2-9]{1}[0-9]{11}$").unwrap()
});

/// Check an Aadhaar number's format
pub fn is_valid_aadhaar_number(value: &str) -> bool {
    AADHAAR_REGEX.is_match(value)
}
