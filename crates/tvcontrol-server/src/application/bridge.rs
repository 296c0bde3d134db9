//! The bridge-runner seam.
//!
//! The application layer never spawns processes itself.  It describes an
//! invocation (argument list plus [`RunOptions`]) and hands it to a
//! [`BridgeRunner`].  The production implementation is
//! `infrastructure::adb_runner::AdbRunner`; tests inject
//! `infrastructure::mock_runner::MockBridgeRunner`.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Errors produced while running the bridge executable.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The executable could not be started (not found, not executable, ...).
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran and exited with a non-zero status.
    ///
    /// `message` is the trimmed stderr, falling back to stdout, falling back
    /// to a description of the exit status.
    #[error("{message}")]
    CommandFailed { message: String, code: Option<i32> },

    /// The process did not finish in time and was killed.
    #[error("bridge command timed out after {}ms: {command}", .timeout.as_millis())]
    Timeout { command: String, timeout: Duration },

    /// Reading the process output failed.
    #[error("I/O error while running bridge command: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-invocation options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Target device.  Blank or absent means "let the tool pick".
    pub serial: Option<String>,
    /// Overrides the runner's default timeout.
    pub timeout: Option<Duration>,
}

impl RunOptions {
    /// Options that only target a device.
    pub fn for_serial(serial: Option<&str>) -> Self {
        Self {
            serial: serial.map(str::to_string),
            timeout: None,
        }
    }

    /// Options that only override the timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            serial: None,
            timeout: Some(timeout),
        }
    }

    /// The trimmed serial, or `None` if it is absent or blank.
    pub fn target(&self) -> Option<&str> {
        self.serial
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Builds the full argument list, prefixing `-s <serial>` when a target
    /// device is set.
    pub fn final_args(&self, args: &[String]) -> Vec<String> {
        match self.target() {
            Some(serial) => {
                let mut full = Vec::with_capacity(args.len() + 2);
                full.push("-s".to_string());
                full.push(serial.to_string());
                full.extend_from_slice(args);
                full
            }
            None => args.to_vec(),
        }
    }
}

/// Captured result of a successful (exit code 0) invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Trimmed standard output.
    pub stdout: String,
    /// Trimmed standard error.
    pub stderr: String,
    pub code: i32,
}

impl CommandOutput {
    /// Stdout, or stderr when stdout is empty.
    ///
    /// `adb connect` and `adb disconnect` are inconsistent about which stream
    /// they report on.
    pub fn message(&self) -> &str {
        if self.stdout.is_empty() {
            &self.stderr
        } else {
            &self.stdout
        }
    }
}

/// Runs the bridge executable.
///
/// Implementations must not serialize calls: concurrent requests each get
/// their own process.
#[async_trait]
pub trait BridgeRunner: Send + Sync {
    /// Runs the tool with `args` (the `-s` prefix is added from `options`).
    ///
    /// # Errors
    ///
    /// - [`BridgeError::Spawn`] if the process cannot start.
    /// - [`BridgeError::CommandFailed`] on a non-zero exit.
    /// - [`BridgeError::Timeout`] if the timeout elapses; the process is killed.
    async fn run(&self, args: &[String], options: &RunOptions) -> Result<CommandOutput, BridgeError>;
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_final_args_without_serial_is_unchanged() {
        let opts = RunOptions::default();
        assert_eq!(opts.final_args(&args(&["devices"])), args(&["devices"]));
    }

    #[test]
    fn test_final_args_prefixes_serial() {
        let opts = RunOptions::for_serial(Some("192.168.1.30:5555"));
        assert_eq!(
            opts.final_args(&args(&["shell", "input", "keyevent", "KEYCODE_HOME"])),
            args(&["-s", "192.168.1.30:5555", "shell", "input", "keyevent", "KEYCODE_HOME"])
        );
    }

    #[test]
    fn test_blank_serial_is_ignored() {
        let opts = RunOptions::for_serial(Some("   "));
        assert_eq!(opts.target(), None);
        assert_eq!(opts.final_args(&args(&["devices"])), args(&["devices"]));
    }

    #[test]
    fn test_serial_is_trimmed() {
        let opts = RunOptions::for_serial(Some("  USB123 "));
        assert_eq!(opts.target(), Some("USB123"));
    }

    #[test]
    fn test_message_prefers_stdout() {
        let out = CommandOutput {
            stdout: "connected to 10.0.0.2:5555".into(),
            stderr: "warning".into(),
            code: 0,
        };
        assert_eq!(out.message(), "connected to 10.0.0.2:5555");
    }

    #[test]
    fn test_message_falls_back_to_stderr() {
        let out = CommandOutput {
            stdout: String::new(),
            stderr: "disconnected everything".into(),
            code: 0,
        };
        assert_eq!(out.message(), "disconnected everything");
    }

    #[test]
    fn test_timeout_error_message_names_command() {
        let err = BridgeError::Timeout {
            command: "connect 10.0.0.2:5555".into(),
            timeout: Duration::from_millis(10_000),
        };
        assert_eq!(
            err.to_string(),
            "bridge command timed out after 10000ms: connect 10.0.0.2:5555"
        );
    }

    #[test]
    fn test_command_failed_displays_message_only() {
        let err = BridgeError::CommandFailed {
            message: "error: device offline".into(),
            code: Some(1),
        };
        assert_eq!(err.to_string(), "error: device offline");
    }
}
