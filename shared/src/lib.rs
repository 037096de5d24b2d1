//! Shared utilities and common types for the KYC connector
//!
//! This crate provides common functionality used across all workspace crates:
//! - Configuration types (environment, connector credentials, logging, request log retention)
//! - Tracing subscriber setup
//! - Utility functions (phone masking, identity number validation, date formatting)

pub mod config;
pub mod logging;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, ConnectorConfig, DatabaseConfig, Environment, LogFormat, LoggingConfig,
    RequestLogConfig,
};
pub use logging::init_tracing;
pub use utils::{date, phone, url, validation};
