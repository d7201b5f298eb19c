//! Diagnostic output setup.
//!
//! Every harness diagnostic (seed, per-case timings, failures) is a `tracing`
//! event written to stderr, keeping stdout free for machine-readable output.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable that overrides the verbosity-derived filter.
pub const LOG_ENV: &str = "RUST_LOG";

/// Diagnostic output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Diagnostic output configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Output format
    pub format: LogFormat,
    /// Filter directive used when `RUST_LOG` is unset (e.g. "info")
    pub level: String,
}

impl LogConfig {
    /// Derives the filter level from `-v`/`-q` counts.
    pub fn from_verbosity(format: LogFormat, verbose: u8, quiet: u8) -> Self {
        Self {
            format,
            level: level_for(verbose, quiet).to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            level: "info".to_string(),
        }
    }
}

/// Errors that can occur while installing the subscriber.
#[derive(Debug, Error)]
pub enum LogError {
    /// The filter directive could not be parsed
    #[error("invalid log filter: {0}")]
    InvalidFilter(String),

    /// A global subscriber is already installed
    #[error("log subscriber already initialized")]
    AlreadyInitialized,
}

/// Maps `-v`/`-q` counts to a level; quiet wins when both are given.
pub fn level_for(verbose: u8, quiet: u8) -> &'static str {
    match (quiet, verbose) {
        (q, _) if q >= 2 => "error",
        (1, _) => "warn",
        (_, 0) => "info",
        (_, 1) => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. Call once at startup.
///
/// # Errors
///
/// Returns [`LogError::InvalidFilter`] if the filter cannot be parsed and
/// [`LogError::AlreadyInitialized`] if a subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), LogError> {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directive) if !directive.is_empty() => EnvFilter::try_new(directive),
        _ => EnvFilter::try_new(&config.level),
    }
    .map_err(|e| LogError::InvalidFilter(e.to_string()))?;

    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_ansi(io::stderr().is_terminal())
                    .with_target(false)
                    .without_time(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init(),
    }
    .map_err(|_| LogError::AlreadyInitialized)
}
