//! Structured logging initialization via `tracing`.

use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("unknown log format: {0} (expected \"human\" or \"json\")")]
    UnknownFormat(String),

    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    #[error("failed to install subscriber: {0}")]
    Install(String),
}

/// Output shape of log lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Human,
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(LoggingError::UnknownFormat(s.to_string())),
        }
    }
}

/// Build the filter: `RUST_LOG` if set, otherwise `level`.
fn env_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level).map_err(|e| LoggingError::InvalidLevel(e.to_string())),
    }
}

/// Initialize the global tracing subscriber.
///
/// Respects the `RUST_LOG` environment variable for filtering; `level` applies
/// when it is unset. Logs go to stderr so command output stays clean.
pub fn init_tracing(level: &str, format: &str) -> Result<(), LoggingError> {
    let filter = env_filter(level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    let installed = match format.parse::<LogFormat>()? {
        LogFormat::Human => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| LoggingError::Install(e.to_string()))
}
