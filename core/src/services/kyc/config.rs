//! Configuration for the verification flows

use kyc_shared::config::{ConnectorConfig, DEFAULT_COUNTRY_CODE};

/// Title of the OTP entry prompt
pub const OTP_PROMPT_TITLE: &str = "Enter OTP for Verification";

/// Configuration for the verification flows
#[derive(Debug, Clone)]
pub struct KycServiceConfig {
    /// Country code sent with mobile numbers
    pub default_country_code: String,
    /// Public URL of the host site, used to absolutize image paths
    pub site_url: String,
    /// Title of the OTP entry prompt
    pub otp_prompt_title: String,
}

impl Default for KycServiceConfig {
    fn default() -> Self {
        Self {
            default_country_code: DEFAULT_COUNTRY_CODE.to_string(),
            site_url: String::new(),
            otp_prompt_title: OTP_PROMPT_TITLE.to_string(),
        }
    }
}

impl KycServiceConfig {
    /// Derive flow settings from the connector configuration
    pub fn from_connector(connector: &ConnectorConfig) -> Self {
        Self {
            default_country_code: connector.default_country_code.clone(),
            site_url: connector.site_url.clone(),
            ..Default::default()
        }
    }
}
