//! Conformance harness for bounded-buffer line relay programs.
//!
//! The harness launches a subject once per generated case, feeds it
//! newline-delimited records, and checks that what comes back is either an
//! exact echo or a sufficiently long tail of the input. Case generation and
//! the contract itself live in `relay-core`; this crate owns the subject
//! process, diagnostics, and the command-line surface.

use std::io;
use std::time::Duration;

pub mod config;
pub mod error;
pub mod logging;
pub mod process;
pub mod report;
pub mod runner;

pub(crate) mod utils;


pub use config::{CaseFilter, HarnessConfig, Subject, DEFAULT_SUBJECT, DEFAULT_TIMEOUT};
pub use error::{CaseFailure, Error, Result, RunError};
pub use logging::{init_logging, LogConfig, LogFormat};
pub use process::{list_cases, run_case, run_suite};
pub use report::{CaseOutcome, CaseReport, SuiteSummary};
pub use runner::{run_subject, Completion, RunResult};

/// Exit status when at least one case failed.
pub const EXIT_CASE_FAILURE: i32 = 1;

/// Exit status when the harness itself could not complete.
pub const EXIT_HARNESS_ERROR: i32 = 2;

/// Parses a timeout given in seconds; fractions are allowed (`"0.5"`).
///
/// # Errors
///
/// Returns an error message if the value is not a finite, positive number of
/// seconds representable as a [`Duration`].
pub fn parse_timeout(s: &str) -> std::result::Result<Duration, String> {
    let s = s.trim();
    let secs: f64 = s
        .parse()
        .map_err(|_| format!("Invalid timeout: {s}"))?;

    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("Timeout must be a positive number of seconds: {s}"));
    }

    Duration::try_from_secs_f64(secs).map_err(|_| format!("Timeout too large: {s}"))
}

/// Runs the harness as configured, writing the case list to `out` in list mode.
///
/// Returns `true` when every executed case passed (always `true` in list mode).
///
/// # Errors
///
/// Returns an error if the subject cannot be driven or the listing cannot be written.
pub async fn run_cli<W: io::Write>(config: &HarnessConfig, out: &mut W) -> Result<bool> {
    if config.list_only {
        list_cases(config, out)?;
        return Ok(true);
    }

    let summary = run_suite(config).await?;
    Ok(summary.success())
}
