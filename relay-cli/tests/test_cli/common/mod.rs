use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use tokio::io::AsyncWriteExt;

/// Binary to execute
#[derive(Debug, Clone, Copy)]
pub enum Binary {
    /// The harness under test
    RelayCheck,
    /// The reference subject
    TailRelay,
}

impl Binary {
    /// Returns the path cargo built this binary at.
    pub fn path(self) -> &'static Path {
        Path::new(match self {
            Binary::RelayCheck => env!("CARGO_BIN_EXE_relay-check"),
            Binary::TailRelay => env!("CARGO_BIN_EXE_tail-relay"),
        })
    }
}

/// Find a system binary in PATH
pub fn find_system_binary(name: &str) -> Option<PathBuf> {
    if let Ok(path) = which::which(name) {
        return Some(path);
    }

    ["/usr/bin", "/bin"]
        .iter()
        .map(|base| Path::new(base).join(name))
        .find(|path| path.is_file())
}

/// Output from running a binary
pub struct Output {
    pub status: ExitStatus,
    pub stdout_raw: Vec<u8>,
    pub stdout: String,
    pub stderr: String,
}

impl Output {
    /// Number of stderr lines containing `needle`.
    pub fn stderr_count(&self, needle: &str) -> usize {
        self.stderr.lines().filter(|line| line.contains(needle)).count()
    }
}

/// A single invocation of one of the workspace binaries
pub struct Invocation {
    binary: Binary,
    args: Vec<OsString>,
    envs: Vec<(String, String)>,
    stdin: Vec<u8>,
}

impl Invocation {
    pub fn new(binary: Binary) -> Self {
        Self {
            binary,
            args: Vec::new(),
            envs: Vec::new(),
            stdin: Vec::new(),
        }
    }

    /// Invocation of `relay-check` with `tail-relay` as its subject.
    pub fn against_tail_relay() -> Self {
        Self::new(Binary::RelayCheck).arg(Binary::TailRelay.path())
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn stdin(mut self, bytes: &[u8]) -> Self {
        self.stdin = bytes.to_vec();
        self
    }

    /// Run the binary to completion
    ///
    /// # Panics
    ///
    /// Panics if the process cannot be spawned or awaiting its output fails.
    pub async fn run(self) -> Output {
        let mut command = tokio::process::Command::new(self.binary.path());
        command
            .args(&self.args)
            .env_remove("RELAY_CHECK_SEED")
            .env_remove("RUST_LOG")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(Stdio::piped())
            .kill_on_drop(true);
        for (key, value) in &self.envs {
            command.env(key, value);
        }
        let mut child = command.spawn().unwrap();

        let stdin_bytes = self.stdin;
        let mut stdin = child.stdin.take().unwrap();
        let writer = tokio::spawn(async move {
            stdin.write_all(&stdin_bytes).await.unwrap_or_else(|err| {
                // Some commands intentionally exit without reading stdin.
                if err.kind() != std::io::ErrorKind::BrokenPipe {
                    panic!("failed write to stdin ({} bytes): {err}", stdin_bytes.len());
                }
            });
        });

        // Read stdout/stderr while waiting so large outputs cannot fill the pipes.
        let raw_output = child.wait_with_output().await.unwrap();
        writer.await.unwrap();

        Output {
            status: raw_output.status,
            stdout_raw: raw_output.stdout.clone(),
            stdout: String::from_utf8_lossy(&raw_output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&raw_output.stderr).into_owned(),
        }
    }
}
