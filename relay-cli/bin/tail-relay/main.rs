//! Reference bounded-buffer line relay
//!
//! Keeps the tail of its input that fits the budget given as its argument
//! and writes it out at end of input. The harness integration tests run it
//! as a known-good subject, and with `--fault` as a known-bad one.

use std::io::{self, BufRead, Write};
use std::process;
use std::thread;
use std::time::Duration;

mod opts;
mod tail;

use opts::{Fault, TailRelayOpts};
use tail::TailBuffer;

const PROGRAM_NAME: &str = "tail-relay";

fn main() -> io::Result<()> {
    let opts = TailRelayOpts::parse();

    let mut buffer = TailBuffer::new(opts.budget);
    let mut input = io::stdin().lock();
    let mut records = 0usize;
    loop {
        let mut record = Vec::new();
        if input.read_until(b'\n', &mut record)? == 0 {
            break;
        }
        records += 1;
        buffer.push(record);
    }

    if opts.fault == Some(Fault::Noise) {
        eprintln!(
            "{PROGRAM_NAME}: read {records} records, holding {} bytes",
            buffer.held()
        );
    }

    let mut output = buffer.into_bytes();
    match opts.fault {
        Some(Fault::Hang) => loop {
            thread::sleep(Duration::from_secs(3600));
        },
        Some(Fault::Discard) => output.clear(),
        Some(Fault::Corrupt) => {
            if let Some(first) = output.first_mut() {
                *first = if *first == b'#' { b'%' } else { b'#' };
            }
        }
        Some(Fault::Fail) | Some(Fault::Noise) | None => {}
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.flush()?;

    if opts.fault == Some(Fault::Fail) {
        process::exit(3);
    }
    Ok(())
}
