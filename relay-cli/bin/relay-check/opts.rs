//! Command line argument parsing for the relay-check harness.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use relay_core::config::DEFAULT_RANDOM_CASES;
use relay_core::CasePlan;
use relay_cli::{
    parse_timeout, CaseFilter, HarnessConfig, LogConfig, LogFormat, Subject, DEFAULT_SUBJECT,
};

/// Conformance tester for bounded-buffer line relays
///
/// Runs SUBJECT once per generated case with the case's buffer size as its
/// last argument, feeds it newline-delimited records on stdin, and checks
/// that stdout is either an exact echo or a long-enough tail of the input.
#[derive(Debug, Parser)]
#[command(
    name = "relay-check",
    version,
    about = "Conformance tester for bounded-buffer line relays",
    after_help = "Diagnostics go to stderr. To replay a failing case, pass the \
                  reported seed with --seed and its index with --case."
)]
pub struct RelayCheckOpts {
    /// Program under test
    #[arg(value_name = "SUBJECT", default_value = DEFAULT_SUBJECT)]
    subject: PathBuf,

    /// Arguments passed to SUBJECT before the buffer size
    #[arg(value_name = "SUBJECT_ARGS", last = true)]
    subject_args: Vec<OsString>,

    /// Seed of the run to replay (a fresh seed is drawn otherwise)
    #[arg(short = 's', long = "seed", env = "RELAY_CHECK_SEED")]
    seed: Option<u64>,

    /// Seconds allowed for each subject round trip
    #[arg(
        short = 't',
        long = "timeout",
        value_name = "SECS",
        default_value = "10",
        value_parser = parse_timeout
    )]
    timeout: Duration,

    /// Number of randomized cases after the boundary grid
    #[arg(
        short = 'n',
        long = "random-cases",
        value_name = "N",
        default_value_t = DEFAULT_RANDOM_CASES
    )]
    random_cases: usize,

    /// Run only the case with this index (may be repeated)
    #[arg(short = 'c', long = "case", value_name = "INDEX")]
    cases: Vec<usize>,

    /// Print the enumerated cases to stdout and exit without running SUBJECT
    #[arg(short = 'l', long = "list-cases")]
    list_cases: bool,

    /// Diagnostic output format
    #[arg(long = "log-format", value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// More diagnostics (repeat for more)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Fewer diagnostics (repeat for fewer)
    #[arg(short = 'q', long = "quiet", action = clap::ArgAction::Count)]
    quiet: u8,
}

impl RelayCheckOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build the harness configuration from the parsed options
    pub fn config(&self) -> HarnessConfig {
        HarnessConfig {
            subject: Subject::new(&self.subject)
                .with_leading_args(self.subject_args.iter().cloned()),
            seed: self.seed,
            timeout: self.timeout,
            plan: CasePlan::default().with_random_cases(self.random_cases),
            filter: CaseFilter::from_indices(self.cases.iter().copied()),
            list_only: self.list_cases,
            log: LogConfig::from_verbosity(self.log_format, self.verbose, self.quiet),
        }
    }
}
