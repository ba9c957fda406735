//! Host configuration loaded from the environment (and an optional `.env`).

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use validator::Validate;

use crate::error::AppError;

pub const DEFAULT_DEBOUNCE_MS: u64 = 200;
pub const DEFAULT_MAX_MESSAGE_BYTES: usize = 1024 * 1024;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Output format of the log layer (always written to stderr)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" | "bunyan" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!("Unknown log format '{}'", other))),
        }
    }
}

/// Represents the configuration of the native-messaging host.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HostConfig {
    /// Quiet period before realtime suggestions are published.
    #[validate(range(max = 5000))]
    pub debounce_ms: u64,
    /// Largest accepted request frame, in bytes.
    #[validate(range(min = 1024, max = 67108864))]
    pub max_message_bytes: usize,
    /// `tracing_subscriber::EnvFilter` directive.
    #[validate(length(min = 1))]
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl HostConfig {
    /// Loads `.env` if present, then reads and validates `PROMPTY_*` variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        Self::from_vars()
    }

    /// Reads the process environment only.
    pub fn from_vars() -> Result<Self, AppError> {
        let defaults = Self::default();

        let config = Self {
            debounce_ms: read_var("PROMPTY_DEBOUNCE_MS")?.unwrap_or(defaults.debounce_ms),
            max_message_bytes: read_var("PROMPTY_MAX_MESSAGE_BYTES")?
                .unwrap_or(defaults.max_message_bytes),
            log_filter: env::var("PROMPTY_LOG").unwrap_or(defaults.log_filter),
            log_format: read_var("PROMPTY_LOG_FORMAT")?.unwrap_or(defaults.log_format),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn read_var<T>(key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    AppError: From<T::Err>,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => Ok(Some(raw.trim().parse::<T>()?)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = HostConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.debounce(), Duration::from_millis(200));
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let config = HostConfig {
            max_message_bytes: 10,
            ..HostConfig::default()
        };

        assert!(config.validate().is_err());
    }
}
