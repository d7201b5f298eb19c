//! Small shared utilities for the harness.
//!
//! Formatting helpers used by the reporter that don't belong to the
//! orchestration layer itself.

pub(crate) mod time;
