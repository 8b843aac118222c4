//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The terminal is owned by the alternate screen while the app runs, so
//! log output only ever goes to a file. Without a log file no subscriber
//! is installed and events are dropped.

use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::{
    filter::ParseError,
    fmt,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

/// Filter used when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot open log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),
    #[error("logging already initialized: {0}")]
    Init(#[from] TryInitError),
}

/// Configuration for logging behavior.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Filter directive such as `debug` or `lemonade=trace`
    pub level: Option<String>,
    /// File that receives log lines
    pub log_file: Option<PathBuf>,
}

/// Builds the event filter from an explicit directive, then `RUST_LOG`,
/// then [`DEFAULT_LOG_LEVEL`].
pub fn build_env_filter(level: Option<&str>) -> Result<EnvFilter, ParseError> {
    match level {
        Some(directive) => EnvFilter::try_new(directive),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))),
    }
}

/// Installs the global subscriber when a log file is configured.
///
/// Returns `true` if a subscriber was installed.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the filter does not
/// parse, or a global subscriber already exists.
pub fn init_logging(config: &LogConfig) -> Result<bool, LoggingError> {
    let Some(path) = &config.log_file else {
        return Ok(false);
    };

    let filter = build_env_filter(config.level.as_deref())?;
    let file: File = OpenOptions::new().create(true).append(true).open(path)?;
    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_filter_parses() {
        assert!(build_env_filter(Some("debug")).is_ok());
        assert!(build_env_filter(Some("lemonade=trace,warn")).is_ok());
    }

    #[test]
    fn test_bad_filter_is_rejected() {
        assert!(build_env_filter(Some("lemonade=notalevel")).is_err());
    }

    #[test]
    fn test_no_log_file_installs_nothing() {
        let config = LogConfig {
            level: Some("debug".to_string()),
            log_file: None,
        };
        assert!(!init_logging(&config).unwrap());
    }

    #[test]
    fn test_bad_filter_fails_before_opening_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lemonade.log");
        let config = LogConfig {
            level: Some("lemonade=notalevel".to_string()),
            log_file: Some(path.clone()),
        };

        assert!(matches!(init_logging(&config), Err(LoggingError::Filter(_))));
        assert!(!path.exists());
    }
}
