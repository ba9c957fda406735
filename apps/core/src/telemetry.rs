//! Logging setup. Everything goes to stderr; stdout belongs to the protocol.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{HostConfig, LogFormat};
use crate::error::AppError;

/// Builds the `EnvFilter` for the configured directive.
pub fn env_filter(config: &HostConfig) -> Result<EnvFilter, AppError> {
    EnvFilter::try_new(&config.log_filter)
        .map_err(|e| AppError::Config(format!("Invalid log filter '{}': {}", config.log_filter, e)))
}

/// Installs the global subscriber. Fails if one is already set.
pub fn init(config: &HostConfig) -> Result<(), AppError> {
    let registry = tracing_subscriber::registry().with(env_filter(config)?);

    let result = match config.log_format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
            .try_init(),
        LogFormat::Json => registry
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(
                env!("CARGO_PKG_NAME").to_string(),
                std::io::stderr,
            ))
            .try_init(),
    };

    result.map_err(|e| AppError::Config(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_accepts_directives() {
        let config = HostConfig {
            log_filter: "prompty_core=debug,warn".to_string(),
            ..HostConfig::default()
        };
        assert!(env_filter(&config).is_ok());
    }

    #[test]
    fn test_env_filter_rejects_garbage() {
        let config = HostConfig {
            log_filter: "prompty_core=loud".to_string(),
            ..HostConfig::default()
        };
        assert!(matches!(env_filter(&config), Err(AppError::Config(_))));
    }
}
