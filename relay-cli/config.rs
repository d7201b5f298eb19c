//! Configuration types and constants for a harness run.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use relay_core::CasePlan;

use crate::logging::LogConfig;

/// Wall-clock bound on one subject round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Subject program used when none is given on the command line.
pub const DEFAULT_SUBJECT: &str = "./test";

/// The program under test and the arguments placed before its buffer size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    /// Executable to launch
    pub program: PathBuf,
    /// Arguments passed ahead of the buffer size (empty by default)
    pub leading_args: Vec<OsString>,
}

impl Subject {
    /// A subject invoked with the buffer size as its sole argument.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    /// Adds arguments that precede the buffer size.
    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.leading_args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl Default for Subject {
    fn default() -> Self {
        Self::new(DEFAULT_SUBJECT)
    }
}

/// Which enumerated cases to execute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CaseFilter {
    /// Run every case.
    #[default]
    All,
    /// Run only the listed case indices; the rest are still generated.
    Only(BTreeSet<usize>),
}

impl CaseFilter {
    /// Builds a filter from user-supplied indices; no indices means all cases.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        let selected: BTreeSet<usize> = indices.into_iter().collect();
        if selected.is_empty() {
            CaseFilter::All
        } else {
            CaseFilter::Only(selected)
        }
    }

    /// Whether the case at `index` should be executed.
    pub fn includes(&self, index: usize) -> bool {
        match self {
            CaseFilter::All => true,
            CaseFilter::Only(selected) => selected.contains(&index),
        }
    }
}

/// Configuration for one harness run
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Program under test
    pub subject: Subject,
    /// Seed to replay; a fresh one is drawn when `None`
    pub seed: Option<u64>,
    /// Bound on each subject round trip
    pub timeout: Duration,
    /// Cases to enumerate
    pub plan: CasePlan,
    /// Cases to execute
    pub filter: CaseFilter,
    /// Print the enumerated cases instead of running them
    pub list_only: bool,
    /// Diagnostic output settings
    pub log: LogConfig,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            subject: Subject::default(),
            seed: None,
            timeout: DEFAULT_TIMEOUT,
            plan: CasePlan::default(),
            filter: CaseFilter::All,
            list_only: false,
            log: LogConfig::default(),
        }
    }
}
