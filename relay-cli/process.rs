//! Suite orchestration: generate, run, verify, report, one case at a time.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use relay_core::{enumerate_cases, verify, InputStream, ReplayRng, TestCase};

use crate::config::{CaseFilter, HarnessConfig};
use crate::error::{CaseFailure, Error, Result, RunError};
use crate::report::{self, CaseOutcome, CaseReport, SuiteSummary};
use crate::runner::{run_subject, Completion, RunResult};

/// Classifies a finished round trip.
///
/// A non-zero exit fails the case regardless of what was written; only a
/// clean exit gets its output verified.
pub fn judge(
    input: &InputStream,
    case: &TestCase,
    result: &RunResult,
) -> std::result::Result<relay_core::Verdict, CaseFailure> {
    if !result.status.success() {
        return Err(CaseFailure::ExitStatus {
            code: result.exit_code(),
            signal: result.signal(),
        });
    }
    Ok(verify(input, case.buffer_size, &result.stdout)?)
}

/// Runs one case against the subject and classifies the result.
///
/// # Errors
///
/// Returns an error only when the subject cannot be launched. Subject
/// misbehavior, including a pipe failing mid-round-trip, is reported through
/// [`CaseOutcome`].
pub async fn run_case(
    config: &HarnessConfig,
    case: &TestCase,
    input: &InputStream,
) -> Result<(CaseOutcome, Duration)> {
    let started_at = Instant::now();
    let attempt = run_subject(
        &config.subject,
        case.buffer_size,
        input.as_bytes(),
        config.timeout,
    )
    .await;
    settle(config, case, input, attempt, started_at.elapsed())
}

/// Turns the result of one round trip into a case outcome.
///
/// Only a spawn failure escapes as an error; an I/O failure on an already
/// running subject fails just this case.
fn settle(
    config: &HarnessConfig,
    case: &TestCase,
    input: &InputStream,
    attempt: std::result::Result<Completion, RunError>,
    elapsed: Duration,
) -> Result<(CaseOutcome, Duration)> {
    let completion = match attempt {
        Ok(completion) => completion,
        Err(RunError::Io(err)) => {
            return Ok((CaseOutcome::Failed(CaseFailure::Io(err.to_string())), elapsed));
        }
        Err(err) => return Err(err.into()),
    };

    Ok(match completion {
        Completion::TimedOut { elapsed } => (
            CaseOutcome::Failed(CaseFailure::Hang {
                timeout: config.timeout,
            }),
            elapsed,
        ),
        Completion::Finished(result) => {
            let outcome = match judge(input, case, &result) {
                Ok(verdict) => CaseOutcome::Passed(verdict),
                Err(failure) => CaseOutcome::Failed(failure),
            };
            (outcome, result.elapsed)
        }
    })
}

/// Runs the whole case set and returns its totals.
///
/// Cases run strictly one after another. Every enumerated case has its input
/// synthesized, including filtered-out ones, so that a filtered run draws the
/// same random stream as a full run with the same seed. A failing case never
/// stops the run.
///
/// # Errors
///
/// Returns an error if the subject cannot be launched.
pub async fn run_suite(config: &HarnessConfig) -> Result<SuiteSummary> {
    let mut rng = seeded_rng(config);
    report::seed(rng.seed());

    let cases = enumerate_cases(&config.plan, &mut rng);
    let plan = &config.plan;
    tracing::debug!(
        cases = cases.len(),
        random_cases = plan.random_cases,
        buffer_size_low = plan.buffer_size_range.low(),
        buffer_size_ceiling = plan.buffer_size_range.ceiling(),
        record_length_low = plan.record_length_range.low(),
        record_length_ceiling = plan.record_length_range.ceiling(),
        "case plan"
    );
    if let CaseFilter::Only(selected) = &config.filter {
        for &index in selected.range(cases.len()..) {
            tracing::warn!(index, total = cases.len(), "selected case does not exist");
        }
    }
    let mut summary = SuiteSummary::new(rng.seed());

    for (index, case) in cases.iter().enumerate() {
        let selected = config.filter.includes(index);
        if selected {
            report::case_started(index, cases.len(), case);
        }

        let generate_at = Instant::now();
        let input = InputStream::synthesize(
            case.record_count,
            &config.plan.record_length_range,
            &mut rng,
        );
        let generated_in = generate_at.elapsed();

        let (outcome, elapsed) = if selected {
            run_case(config, case, &input).await?
        } else {
            (CaseOutcome::Skipped, Duration::ZERO)
        };

        let case_report = CaseReport {
            index,
            case: *case,
            generated_in,
            elapsed,
            outcome,
        };
        report::case_finished(rng.seed(), &case_report);
        summary.record(&case_report);
    }

    report::summary(&summary);
    Ok(summary)
}

/// Writes the enumerated plan to `out`, one case per line:
/// `<index> <origin> <buffer_size> <record_count>`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn list_cases<W: Write>(config: &HarnessConfig, out: &mut W) -> Result<u64> {
    let mut rng = seeded_rng(config);
    report::seed(rng.seed());

    let cases = enumerate_cases(&config.plan, &mut rng);
    write_cases(&cases, out).map_err(Error::Listing)?;
    Ok(rng.seed())
}

fn write_cases<W: Write>(cases: &[TestCase], out: &mut W) -> io::Result<()> {
    for (index, case) in cases.iter().enumerate() {
        writeln!(
            out,
            "{index} {} {} {}",
            case.origin, case.buffer_size, case.record_count
        )?;
    }
    out.flush()
}

fn seeded_rng(config: &HarnessConfig) -> ReplayRng {
    match config.seed {
        Some(seed) => ReplayRng::from_seed(seed),
        None => ReplayRng::from_entropy(),
    }
}
