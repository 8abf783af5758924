//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};
use crate::error::TelemetryError;

/// Build the filter from the configured directives.
pub fn filter_from_config(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.filter).map_err(|source| TelemetryError::InvalidFilter {
        filter: config.filter.clone(),
        source,
    })
}

/// Install the global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over `config.filter` when it is set and valid.
pub fn init(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => filter_from_config(config)?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi);

    let installed = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| TelemetryError::Install(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(filter_from_config(&LoggingConfig::default()).is_ok());
    }

    #[test]
    fn invalid_filter_is_rejected() {
        let config = LoggingConfig {
            filter: "lambdagate=loud".into(),
            ..LoggingConfig::default()
        };

        let err = filter_from_config(&config).unwrap_err();
        assert!(matches!(err, TelemetryError::InvalidFilter { .. }));
        assert!(err.to_string().contains("lambdagate=loud"));
    }

    #[test]
    fn second_init_fails() {
        let config = LoggingConfig {
            format: LogFormat::Text,
            ..LoggingConfig::default()
        };

        // Another test in this binary may already have installed one.
        let _ = init(&config);
        assert!(matches!(init(&config), Err(TelemetryError::Install(_))));
    }
}
