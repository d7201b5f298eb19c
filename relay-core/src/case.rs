//! Test case enumeration.

use std::fmt;

use rand::Rng;

use crate::config::CasePlan;

/// Where a test case came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseOrigin {
    /// Part of the deterministic boundary grid.
    Boundary,
    /// Drawn from the seeded random source.
    Random,
}

impl fmt::Display for CaseOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseOrigin::Boundary => f.write_str("boundary"),
            CaseOrigin::Random => f.write_str("random"),
        }
    }
}

/// One subject invocation: a memory budget and how many records to feed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase {
    /// Budget passed to the subject as its argument; zero is valid
    pub buffer_size: usize,
    /// Number of records to synthesize; zero means empty input
    pub record_count: usize,
    /// Which portion of the plan produced this case
    pub origin: CaseOrigin,
}

impl TestCase {
    /// Creates a boundary-grid case.
    pub fn boundary(buffer_size: usize, record_count: usize) -> Self {
        Self {
            buffer_size,
            record_count,
            origin: CaseOrigin::Boundary,
        }
    }

    /// Creates a randomized case.
    pub fn random(buffer_size: usize, record_count: usize) -> Self {
        Self {
            buffer_size,
            record_count,
            origin: CaseOrigin::Random,
        }
    }
}

/// Returns the deterministic grid: every boundary buffer size crossed with every
/// boundary record count, buffer size varying slowest.
pub fn boundary_cases(plan: &CasePlan) -> Vec<TestCase> {
    let mut cases =
        Vec::with_capacity(plan.boundary_buffer_sizes.len() * plan.boundary_record_counts.len());
    for &buffer_size in &plan.boundary_buffer_sizes {
        for &record_count in &plan.boundary_record_counts {
            cases.push(TestCase::boundary(buffer_size, record_count));
        }
    }
    cases
}

/// Draws `plan.random_cases` randomized cases.
///
/// Each case draws its buffer size and then its record count before the next
/// case starts.
pub fn random_cases<R: Rng + ?Sized>(plan: &CasePlan, rng: &mut R) -> Vec<TestCase> {
    (0..plan.random_cases)
        .map(|_| {
            let buffer_size = plan.buffer_size_range.sample(rng);
            let record_count = plan.record_count_range.sample(rng);
            TestCase::random(buffer_size, record_count)
        })
        .collect()
}

/// Returns the full ordered case list: the boundary grid followed by the randomized cases.
pub fn enumerate_cases<R: Rng + ?Sized>(plan: &CasePlan, rng: &mut R) -> Vec<TestCase> {
    let mut cases = boundary_cases(plan);
    cases.extend(random_cases(plan, rng));
    cases
}
