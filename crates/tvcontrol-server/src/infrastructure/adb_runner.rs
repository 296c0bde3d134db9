//! Subprocess runner for the bridge executable.
//!
//! Every call spawns an independent process; there is no queue and no lock,
//! so concurrent HTTP requests run their commands concurrently at the OS
//! level.
//!
//! # Timeout handling
//!
//! The wait for exit and the draining of both pipes run together under a
//! single `tokio::time::timeout`.  When it elapses the child is killed *and
//! reaped* before the error is returned, so a hung `adb` never outlives the
//! request.  `kill_on_drop` covers the remaining case where the request
//! future itself is dropped mid-command (client went away).

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::{debug, warn};

use crate::application::bridge::{BridgeError, BridgeRunner, CommandOutput, RunOptions};

/// Runs the real bridge executable with `tokio::process`.
#[derive(Debug, Clone)]
pub struct AdbRunner {
    program: PathBuf,
    default_timeout: Duration,
}

impl AdbRunner {
    pub fn new(program: impl Into<PathBuf>, default_timeout: Duration) -> Self {
        Self {
            program: program.into(),
            default_timeout,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }
}

/// Reads a child pipe to the end, lossily decoding as UTF-8.
async fn drain<R: AsyncRead + Unpin>(pipe: Option<R>) -> std::io::Result<String> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buf).await?;
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[async_trait]
impl BridgeRunner for AdbRunner {
    async fn run(&self, args: &[String], options: &RunOptions) -> Result<CommandOutput, BridgeError> {
        let final_args = options.final_args(args);
        let timeout = options.timeout.unwrap_or(self.default_timeout);
        let program = self.program.display().to_string();

        debug!(%program, args = ?final_args, ?timeout, "spawning bridge command");

        let mut child = Command::new(&self.program)
            .args(&final_args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| BridgeError::Spawn {
                program: program.clone(),
                source,
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let outcome = tokio::time::timeout(timeout, async {
            tokio::try_join!(child.wait(), drain(stdout), drain(stderr))
        })
        .await;

        let (status, stdout, stderr) = match outcome {
            Ok(result) => result?,
            Err(_) => {
                let command = args.join(" ");
                warn!(%command, ?timeout, "bridge command timed out; killing");
                if let Err(e) = child.kill().await {
                    warn!(%command, "failed to kill timed-out bridge process: {e}");
                }
                return Err(BridgeError::Timeout { command, timeout });
            }
        };

        let stdout = stdout.trim().to_string();
        let stderr = stderr.trim().to_string();

        match status.code() {
            Some(0) => Ok(CommandOutput {
                stdout,
                stderr,
                code: 0,
            }),
            code => {
                let message = if !stderr.is_empty() {
                    stderr
                } else if !stdout.is_empty() {
                    stdout
                } else {
                    match code {
                        Some(c) => format!("{program} exited with code {c}"),
                        None => format!("{program} was terminated by a signal"),
                    }
                };
                debug!(?code, %message, "bridge command failed");
                Err(BridgeError::CommandFailed { message, code })
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
//
// These spawn real processes (`sh`), so they are Unix-only.  Broader
// coverage lives in `tests/adb_runner.rs`.
