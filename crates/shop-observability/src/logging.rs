//! Structured logging through `tracing`.

use std::fmt;
use std::io;

use thiserror::Error;
use tracing_subscriber::{fmt as tfmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log level used when `RUST_LOG` is not set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Filter directive for this level.
    pub fn as_directive(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    Json,
    /// Human-readable format (for terminals).
    #[default]
    Human,
}

/// Errors from logging setup.
#[derive(Error, Debug)]
pub enum LoggingError {
    /// A global subscriber is already installed.
    #[error("logging already initialised: {0}")]
    AlreadyInitialised(String),
}

/// Build the level filter: `RUST_LOG` when set, otherwise `default_level`.
pub fn env_filter(default_level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level.as_directive()))
}

/// Install the global subscriber.
///
/// Logs go to stderr so command output on stdout stays clean.
///
/// # Environment Variables
///
/// - `RUST_LOG`: level filter, overrides `default_level`
pub fn init_logging(format: LogFormat, default_level: LogLevel) -> Result<(), LoggingError> {
    let subscriber = tracing_subscriber::registry().with(env_filter(default_level));

    let result = match format {
        LogFormat::Human => subscriber
            .with(
                tfmt::layer()
                    .with_target(false)
                    .compact()
                    .with_writer(io::stderr),
            )
            .try_init(),
        LogFormat::Json => subscriber
            .with(
                tfmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| LoggingError::AlreadyInitialised(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_directive() {
        assert_eq!(LogLevel::default().as_directive(), "info");
        assert_eq!(LogLevel::Debug.as_directive(), "debug");
        assert_eq!(LogLevel::Warn.to_string(), "WARN");
        assert!(LogLevel::Error > LogLevel::Info);
    }

    #[test]
    fn test_second_init_fails() {
        let _ = init_logging(LogFormat::Human, LogLevel::Warn);
        let second = init_logging(LogFormat::Json, LogLevel::Warn);
        assert!(matches!(second, Err(LoggingError::AlreadyInitialised(_))));
    }
}
