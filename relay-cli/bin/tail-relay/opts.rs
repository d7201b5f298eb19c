//! Command line argument parsing for the tail-relay reference subject.

use clap::{Parser, ValueEnum};

/// Deliberate misbehavior, for exercising the harness's failure paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Fault {
    /// Never exit after reading the input
    Hang,
    /// Write the output, then exit with status 3
    Fail,
    /// Alter the first byte of the output
    Corrupt,
    /// Drop everything
    Discard,
    /// Chatter on stderr (harmless)
    Noise,
}

/// Bounded-buffer line relay
///
/// Reads newline-delimited records from stdin, keeps the most recent whole
/// records that fit in BUDGET bytes (delimiters included), and writes them to
/// stdout at end of input.
#[derive(Debug, Parser)]
#[command(name = "tail-relay", version, about = "Bounded-buffer line relay")]
pub struct TailRelayOpts {
    /// Bytes of records to retain
    #[arg(value_name = "BUDGET")]
    pub budget: usize,

    /// Misbehave in the given way
    #[arg(long = "fault", value_enum)]
    pub fault: Option<Fault>,
}

impl TailRelayOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }
}
