//! Subject process execution.
//!
//! One call launches the subject, streams the whole input into it while
//! draining its output, and waits for it to exit, all under one deadline.

use std::io;
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::Command;

use crate::config::Subject;
use crate::error::RunError;

/// What a subject did with one input stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// How the subject exited
    pub status: ExitStatus,
    /// Everything the subject wrote to stdout
    pub stdout: Vec<u8>,
    /// Wall-clock time from launch to exit
    pub elapsed: Duration,
}

impl RunResult {
    /// Exit code, or `None` if the subject was terminated by a signal.
    pub fn exit_code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Terminating signal, if any.
    #[cfg(unix)]
    pub fn signal(&self) -> Option<i32> {
        use std::os::unix::process::ExitStatusExt;
        self.status.signal()
    }

    /// Terminating signal, if any.
    #[cfg(not(unix))]
    pub fn signal(&self) -> Option<i32> {
        None
    }
}

/// Result of a round trip that did not hit a harness-level error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The subject exited within the deadline.
    Finished(RunResult),
    /// The deadline passed; the subject was killed.
    TimedOut {
        /// Time spent before giving up
        elapsed: Duration,
    },
}

/// Runs `subject` with `buffer_size` as its final argument and `input` on stdin.
///
/// stdin is written and stdout is read concurrently, so a subject that emits
/// output before consuming all input (or only after) cannot deadlock the call.
/// stdin is closed once the input is written. stderr is inherited and never
/// read. A subject that stops reading early makes the write fail with a broken
/// pipe; that is ignored here and left to the exit status and verification.
///
/// # Errors
///
/// Returns [`RunError::Spawn`] if the subject cannot be started and
/// [`RunError::Io`] if its output cannot be read or it cannot be reaped.
/// Exceeding `timeout` is not an error: it yields [`Completion::TimedOut`].
pub async fn run_subject(
    subject: &Subject,
    buffer_size: usize,
    input: &[u8],
    timeout: Duration,
) -> Result<Completion, RunError> {
    let started_at = Instant::now();

    let mut child = Command::new(&subject.program)
        .args(&subject.leading_args)
        .arg(buffer_size.to_string())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| RunError::Spawn {
            program: subject.program.clone(),
            source,
        })?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| io::Error::other("subject stdin was not captured"))?;
    let mut stdout = child
        .stdout
        .take()
        .ok_or_else(|| io::Error::other("subject stdout was not captured"))?;

    let round_trip = async {
        let write = async move {
            let written = stdin.write_all(input).await;
            // Dropping stdin delivers EOF.
            drop(stdin);
            match written {
                Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
                other => other,
            }
        };
        let read = async move {
            let mut buf = Vec::new();
            stdout.read_to_end(&mut buf).await.map(|_| buf)
        };

        let (written, read) = tokio::join!(write, read);
        written?;
        let stdout = read?;
        let status = child.wait().await?;
        Ok::<_, io::Error>((status, stdout))
    };

    let outcome = tokio::time::timeout(timeout, round_trip).await;
    match outcome {
        Ok(finished) => {
            let (status, stdout) = finished?;
            Ok(Completion::Finished(RunResult {
                status,
                stdout,
                elapsed: started_at.elapsed(),
            }))
        }
        Err(_) => {
            let elapsed = started_at.elapsed();
            tracing::debug!(pid = child.id(), "deadline expired, killing subject");
            // The child may have exited between the deadline and the kill.
            if let Err(err) = child.kill().await {
                if err.kind() != io::ErrorKind::InvalidInput {
                    return Err(RunError::Io(err));
                }
            }
            Ok(Completion::TimedOut { elapsed })
        }
    }
}
