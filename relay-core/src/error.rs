//! Error types for case-plan construction.

use std::fmt;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that can occur while building a [`crate::config::CasePlan`].
///
/// Generation itself never fails: every range is checked once, when it is
/// constructed, so sampling from it is always well defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The lower bound does not fit below the smallest power-of-two ceiling.
    EmptyRange {
        /// Inclusive lower bound of the draw
        low: usize,
        /// Smallest exponent the ceiling can take
        min_exp: u32,
    },

    /// Exponent bounds are inverted or the ceiling would not fit in `usize`.
    InvalidExponent {
        /// Smallest exponent requested
        min_exp: u32,
        /// Largest exponent requested
        max_exp: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyRange { low, min_exp } => write!(
                f,
                "range [{low}, 2^{min_exp}) is empty; lower bound must be below the ceiling",
            ),
            Error::InvalidExponent { min_exp, max_exp } => write!(
                f,
                "invalid exponent bounds {min_exp}..={max_exp}; need min <= max < {}",
                usize::BITS,
            ),
        }
    }
}

impl std::error::Error for Error {}
