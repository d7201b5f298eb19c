//! Per-case and per-run diagnostics.
//!
//! Everything here is emitted as `tracing` events on stderr. A failure event
//! always carries the seed, case index, buffer size, and record count, which
//! together regenerate the exact failing input.

use std::time::Duration;

use relay_core::{TestCase, Verdict};

use crate::error::CaseFailure;
use crate::utils::time::{format_per_record, format_seconds};

/// How one case ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    /// The output satisfied the contract.
    Passed(Verdict),
    /// The subject misbehaved; see [`CaseFailure`].
    Failed(CaseFailure),
    /// Excluded by the case filter; its input was still generated.
    Skipped,
}

/// Everything reported about one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    /// Position in the enumerated case list
    pub index: usize,
    /// The case parameters
    pub case: TestCase,
    /// Time spent synthesizing the input
    pub generated_in: Duration,
    /// Subject round-trip time; zero for skipped cases
    pub elapsed: Duration,
    /// Result of the case
    pub outcome: CaseOutcome,
}

/// Totals for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteSummary {
    /// Seed the run was generated from
    pub seed: u64,
    /// Cases that passed
    pub passed: usize,
    /// Cases excluded by the filter
    pub skipped: usize,
    /// Indices of failed cases, in order
    pub failed: Vec<usize>,
}

impl SuiteSummary {
    /// Starts an empty summary for the run identified by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Counts one finished case.
    pub fn record(&mut self, report: &CaseReport) {
        match report.outcome {
            CaseOutcome::Passed(_) => self.passed += 1,
            CaseOutcome::Failed(_) => self.failed.push(report.index),
            CaseOutcome::Skipped => self.skipped += 1,
        }
    }

    /// Whether every executed case passed.
    pub fn success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Number of cases actually executed.
    pub fn executed(&self) -> usize {
        self.passed + self.failed.len()
    }
}

/// Reports the seed; must happen before the first random draw.
pub fn seed(seed: u64) {
    tracing::info!(seed, "Random seed = {seed}");
}

/// Reports that a case is about to run.
pub fn case_started(index: usize, total: usize, case: &TestCase) {
    tracing::info!(
        index,
        total,
        origin = %case.origin,
        buffer_size = case.buffer_size,
        record_count = case.record_count,
        "Testing buffer_size={} record_count={}",
        case.buffer_size,
        case.record_count,
    );
}

/// Reports a finished case: timing always, failure details when it failed.
pub fn case_finished(seed: u64, report: &CaseReport) {
    let case = &report.case;
    match &report.outcome {
        CaseOutcome::Skipped => {
            tracing::debug!(index = report.index, "skipped by case filter");
            return;
        }
        CaseOutcome::Passed(verdict) => {
            tracing::debug!(index = report.index, ?verdict, "passed");
        }
        CaseOutcome::Failed(failure) => {
            tracing::error!(
                index = report.index,
                seed,
                buffer_size = case.buffer_size,
                record_count = case.record_count,
                kind = failure.kind(),
                "case {} (buffer_size={} record_count={}) failed: {failure}; \
                 replay with --seed {seed} --case {}",
                report.index,
                case.buffer_size,
                case.record_count,
                report.index,
            );
        }
    }

    tracing::info!(
        index = report.index,
        elapsed_ns = report.elapsed.as_nanos() as u64,
        generated_ns = report.generated_in.as_nanos() as u64,
        "{}",
        timing_line(report.elapsed, case.record_count, report.generated_in),
    );
}

/// Reports run totals.
pub fn summary(summary: &SuiteSummary) {
    if summary.success() {
        tracing::info!(
            seed = summary.seed,
            passed = summary.passed,
            skipped = summary.skipped,
            "all {} executed cases passed ({} skipped)",
            summary.executed(),
            summary.skipped,
        );
    } else {
        tracing::error!(
            seed = summary.seed,
            passed = summary.passed,
            failed = summary.failed.len(),
            skipped = summary.skipped,
            "{} of {} executed cases failed (seed {}): {:?}",
            summary.failed.len(),
            summary.executed(),
            summary.seed,
            summary.failed,
        );
    }
}

/// `Ran for 0.012 s, 93.7 ns/msg. Generated input in 0.001 s.`
pub(crate) fn timing_line(elapsed: Duration, records: usize, generated_in: Duration) -> String {
    let mut line = format!("Ran for {}", format_seconds(elapsed));
    if let Some(rate) = format_per_record(elapsed, records) {
        line.push_str(", ");
        line.push_str(&rate);
    }
    line.push_str(". Generated input in ");
    line.push_str(&format_seconds(generated_in));
    line.push('.');
    line
}
