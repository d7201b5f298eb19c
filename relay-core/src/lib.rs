//! # relay-core
//!
//! Case generation and output verification for bounded-buffer line relays.
//!
//! A line relay reads newline-delimited records, holds at most a fixed budget
//! of bytes, and writes what it kept. This crate provides everything needed to
//! test such a program except running it:
//!
//! - [`config`]: the case plan and exponentially-scaled sampling ranges
//! - [`rng`]: the single seeded random source of a run
//! - [`case`]: deterministic boundary cases followed by randomized ones
//! - [`record`]: record synthesis and input stream serialization
//! - [`verify`]: the echo-or-bounded-tail check
//!
//! ## Example
//!
//! ```
//! use relay_core::{enumerate_cases, verify, CasePlan, InputStream, ReplayRng, Verdict};
//!
//! let plan = CasePlan::default();
//! let mut rng = ReplayRng::from_seed(42);
//! let cases = enumerate_cases(&plan, &mut rng);
//!
//! let case = cases[5]; // buffer_size = 4096, record_count = 1
//! let input = InputStream::synthesize(case.record_count, &plan.record_length_range, &mut rng);
//!
//! // A subject that echoes its input always passes.
//! assert_eq!(verify(&input, case.buffer_size, input.as_bytes()), Ok(Verdict::Echo));
//! ```

pub mod case;
pub mod config;
pub mod error;
pub mod record;
pub mod rng;
pub mod verify;

pub use case::{enumerate_cases, CaseOrigin, TestCase};
pub use config::{CasePlan, ExpRange};
pub use error::{Error, Result};
pub use record::InputStream;
pub use rng::ReplayRng;
pub use verify::{minimum_retained, verify, Verdict, Violation};
