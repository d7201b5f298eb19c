//! Echo-or-bounded-tail conformance check.
//!
//! A subject passes a case when its output is either the exact input stream
//! or a contiguous suffix of it that is no shorter than the retention floor
//! (see [`minimum_retained`]).

use std::fmt;

use crate::record::InputStream;

/// Bytes of bookkeeping a bounded buffer may spend on its own layout.
pub const BOOKKEEPING_OVERHEAD: usize = 2;

/// Shortest tail a correct subject may keep when it drops data.
///
/// A subject may lose its bookkeeping overhead plus the space of one record
/// and its delimiter, but nothing more. The result saturates at zero, so small
/// budgets or long records guarantee no retention at all.
pub fn minimum_retained(buffer_size: usize, max_record_length: usize) -> usize {
    buffer_size
        .saturating_sub(BOOKKEEPING_OVERHEAD)
        .saturating_sub(max_record_length)
        .saturating_sub(1)
}

/// How a passing output relates to its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Output is byte-identical to the input.
    Echo,
    /// Output is a long-enough suffix of the input.
    Tail {
        /// Bytes kept
        retained: usize,
        /// Bytes dropped from the front of the stream
        dropped: usize,
    },
}

/// Why an output failed verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The input was empty but the subject produced bytes.
    UnexpectedOutput {
        /// Bytes produced
        output_len: usize,
    },
    /// Output is not a contiguous, unmodified suffix of the input.
    NotSuffix {
        /// Bytes produced
        output_len: usize,
        /// Bytes fed in
        input_len: usize,
        /// Length of the longest common suffix of input and output
        matching_tail: usize,
    },
    /// Output is a suffix but shorter than the retention floor.
    TailTooShort {
        /// Bytes kept
        retained: usize,
        /// Retention floor for this case
        required: usize,
        /// Longest record of the case, which the floor is derived from
        max_record_length: usize,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::UnexpectedOutput { output_len } => {
                write!(f, "empty input produced {output_len} bytes of output")
            }
            Violation::NotSuffix {
                output_len,
                input_len,
                matching_tail,
            } => write!(
                f,
                "output ({output_len} bytes) is not a suffix of input ({input_len} bytes); \
                 only the last {matching_tail} bytes match",
            ),
            Violation::TailTooShort {
                retained,
                required,
                max_record_length,
            } => write!(
                f,
                "retained tail of {retained} bytes is below the floor of {required} bytes \
                 (longest record {max_record_length} bytes)",
            ),
        }
    }
}

impl std::error::Error for Violation {}

/// Decides whether `output` is an acceptable response to `input` under `buffer_size`.
///
/// # Errors
///
/// Returns the first [`Violation`] found: unexpected bytes for an empty input,
/// a non-suffix output, or a suffix shorter than [`minimum_retained`].
pub fn verify(input: &InputStream, buffer_size: usize, output: &[u8]) -> Result<Verdict, Violation> {
    let expected = input.as_bytes();
    if output == expected {
        return Ok(Verdict::Echo);
    }

    let Some(max_record_length) = input.max_record_length() else {
        return Err(Violation::UnexpectedOutput {
            output_len: output.len(),
        });
    };

    if !expected.ends_with(output) {
        return Err(Violation::NotSuffix {
            output_len: output.len(),
            input_len: expected.len(),
            matching_tail: common_suffix_len(expected, output),
        });
    }

    let required = minimum_retained(buffer_size, max_record_length);
    if output.len() < required {
        return Err(Violation::TailTooShort {
            retained: output.len(),
            required,
            max_record_length,
        });
    }

    Ok(Verdict::Tail {
        retained: output.len(),
        dropped: expected.len() - output.len(),
    })
}

fn common_suffix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}
