//! Case plan configuration and sampling ranges.

use rand::Rng;

use crate::error::{Error, Result};

/// Buffer sizes every run exercises: a tiny budget, a large one, and zero.
pub const BOUNDARY_BUFFER_SIZES: [usize; 3] = [16, 4096, 0];

/// Record counts every run exercises: empty input, one record, a moderate and a large count.
pub const BOUNDARY_RECORD_COUNTS: [usize; 4] = [0, 1, 128, 4096];

/// Number of randomized cases appended after the boundary grid.
pub const DEFAULT_RANDOM_CASES: usize = 32;

/// Exclusive upper bound on the length of a single record.
pub const MAX_RECORD_LENGTH: usize = 1 << 12;

/// An exponentially-scaled integer range.
///
/// Sampling first picks an exponent `e` uniformly from `min_exp..=max_exp`,
/// then picks a value uniformly from `low..2^e`. Small and large magnitudes
/// are therefore drawn with comparable probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpRange {
    low: usize,
    min_exp: u32,
    max_exp: u32,
}

impl ExpRange {
    /// Creates a range, rejecting bounds that would make a draw impossible.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidExponent`] if `min_exp > max_exp` or the ceiling
    /// `2^max_exp` does not fit in `usize`, and [`Error::EmptyRange`] if
    /// `low >= 2^min_exp`.
    pub fn new(low: usize, min_exp: u32, max_exp: u32) -> Result<Self> {
        if min_exp > max_exp || max_exp >= usize::BITS {
            return Err(Error::InvalidExponent { min_exp, max_exp });
        }
        if low >= 1usize << min_exp {
            return Err(Error::EmptyRange { low, min_exp });
        }
        Ok(Self {
            low,
            min_exp,
            max_exp,
        })
    }

    /// Inclusive lower bound.
    pub fn low(&self) -> usize {
        self.low
    }

    /// Exclusive upper bound of the largest possible draw.
    pub fn ceiling(&self) -> usize {
        1usize << self.max_exp
    }

    /// Draws one value.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let exp = rng.gen_range(self.min_exp..=self.max_exp);
        rng.gen_range(self.low..(1usize << exp))
    }
}

/// Full description of which cases a run enumerates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CasePlan {
    /// Buffer sizes of the deterministic grid (outer loop)
    pub boundary_buffer_sizes: Vec<usize>,
    /// Record counts of the deterministic grid (inner loop)
    pub boundary_record_counts: Vec<usize>,
    /// Number of randomized cases following the grid
    pub random_cases: usize,
    /// Range for randomized buffer sizes
    pub buffer_size_range: ExpRange,
    /// Range for randomized record counts
    pub record_count_range: ExpRange,
    /// Range for the length of each synthesized record
    pub record_length_range: ExpRange,
}

impl CasePlan {
    /// Returns the plan with a different number of randomized cases.
    pub fn with_random_cases(mut self, random_cases: usize) -> Self {
        self.random_cases = random_cases;
        self
    }

    /// Total number of cases the plan enumerates.
    pub fn len(&self) -> usize {
        self.boundary_buffer_sizes.len() * self.boundary_record_counts.len() + self.random_cases
    }

    /// Whether the plan enumerates no cases at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CasePlan {
    fn default() -> Self {
        Self {
            boundary_buffer_sizes: BOUNDARY_BUFFER_SIZES.to_vec(),
            boundary_record_counts: BOUNDARY_RECORD_COUNTS.to_vec(),
            random_cases: DEFAULT_RANDOM_CASES,
            buffer_size_range: ExpRange {
                low: 4,
                min_exp: 3,
                max_exp: 10,
            },
            record_count_range: ExpRange {
                low: 0,
                min_exp: 0,
                max_exp: 14,
            },
            record_length_range: ExpRange {
                low: 0,
                min_exp: 1,
                max_exp: 12,
            },
        }
    }
}
