//! Error types for harness runs.
//!
//! [`CaseFailure`] describes a subject that misbehaved on one case; the run
//! continues past it. [`Error`] describes a harness that cannot continue at all.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use relay_core::Violation;

use crate::logging::LogError;

/// Failure to drive a subject process through one round trip.
#[derive(Debug, Error)]
pub enum RunError {
    /// The subject could not be started
    #[error("{}: cannot execute subject: {source}", program.display())]
    Spawn {
        /// Program that failed to start
        program: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Reading the subject's output or reaping it failed
    #[error("I/O error while talking to subject: {0}")]
    Io(#[from] io::Error),
}

/// Why a single case failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaseFailure {
    /// The round trip did not finish in time; the subject was killed
    #[error("hang: round trip did not complete within {:.3} s", timeout.as_secs_f64())]
    Hang {
        /// Bound that was exceeded
        timeout: Duration,
    },

    /// The subject exited unsuccessfully
    #[error("subject exited with {}", describe_exit(*code, *signal))]
    ExitStatus {
        /// Exit code, if the subject exited normally
        code: Option<i32>,
        /// Terminating signal, if any
        signal: Option<i32>,
    },

    /// Output is neither an echo nor an acceptable tail
    #[error("contract violation: {0}")]
    Contract(#[from] Violation),

    /// A pipe to the subject failed mid-round-trip
    #[error("I/O error while talking to subject: {0}")]
    Io(String),
}

impl CaseFailure {
    /// Short machine-friendly label for the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CaseFailure::Hang { .. } => "hang",
            CaseFailure::ExitStatus { .. } => "exit-status",
            CaseFailure::Contract(_) => "contract",
            CaseFailure::Io(_) => "io",
        }
    }
}

fn describe_exit(code: Option<i32>, signal: Option<i32>) -> String {
    match (code, signal) {
        (Some(code), _) => format!("status {code}"),
        (None, Some(signal)) => format!("signal {signal}"),
        (None, None) => "unknown status".to_string(),
    }
}

/// Specialized `Result` type for harness operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop the whole run.
#[derive(Debug, Error)]
pub enum Error {
    /// Driving the subject failed for reasons other than its own behavior
    #[error(transparent)]
    Run(#[from] RunError),

    /// Diagnostics could not be set up
    #[error(transparent)]
    Logging(#[from] LogError),

    /// Writing the case listing failed
    #[error("failed to write case list: {0}")]
    Listing(#[source] io::Error),
}
