//! Bounded-buffer line relay conformance tester
//!
//! Generates boundary and randomized cases, runs the subject on each, and
//! checks its output against the echo-or-bounded-tail contract. Exits 0 when
//! every case passes, 1 when any case fails, and 2 when the harness itself
//! cannot run.

use std::io;
use std::process;

mod opts;

use opts::RelayCheckOpts;

use relay_cli::{init_logging, run_cli, EXIT_CASE_FAILURE, EXIT_HARNESS_ERROR};

const PROGRAM_NAME: &str = "relay-check";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let opts = RelayCheckOpts::parse();
    let config = opts.config();

    if let Err(err) = init_logging(&config.log) {
        eprintln!("{PROGRAM_NAME}: {err}");
        process::exit(EXIT_HARNESS_ERROR);
    }

    let mut stdout = io::stdout().lock();
    match run_cli(&config, &mut stdout).await {
        Ok(true) => {}
        Ok(false) => process::exit(EXIT_CASE_FAILURE),
        Err(err) => {
            tracing::error!("{PROGRAM_NAME}: {err}");
            process::exit(EXIT_HARNESS_ERROR);
        }
    }
}
