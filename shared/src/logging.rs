//! Tracing subscriber setup

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Install a global `fmt` subscriber built from the logging configuration
///
/// `RUST_LOG` overrides the configured level. Calling this more than once is
/// harmless: later calls leave the first subscriber in place and return
/// `false`.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let builder = fmt()
        .with_env_filter(filter)
        .with_ansi(config.colored)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    result.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: LogFormat::Compact,
            colored: false,
            source_location: false,
        };
        init_tracing(&config);
        assert!(!init_tracing(&config));
    }
}
