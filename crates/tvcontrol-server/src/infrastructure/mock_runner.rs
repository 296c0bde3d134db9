//! Recording bridge runner for tests.
//!
//! # Why a mock runner?
//!
//! The real [`AdbRunner`](super::adb_runner::AdbRunner) needs an `adb`
//! binary and a TV on the other end.  `MockBridgeRunner` replaces the process
//! with in-memory recording: every invocation is pushed into a
//! `Mutex<Vec<RecordedCall>>` with the full argument list (including any
//! `-s <serial>` prefix) and the tokio instant it was made, so tests can
//! assert on exact command lines, ordering and spacing.
//!
//! # Usage in tests
//!
//! ```ignore
//! let runner = Arc::new(MockBridgeRunner::new());
//! let service = RemoteService::new(runner.clone(), ServiceTiming::default());
//!
//! service.dispatch_action(Some("home"), None).await.unwrap();
//!
//! assert_eq!(runner.key_events(), vec!["KEYCODE_HOME"]);
//! ```
//!
//! # Failure injection
//!
//! - `should_fail` fails every call with [`BridgeError::CommandFailed`].
//! - `fail_on_call = Some(n)` fails only the n-th call (zero-based).
//! - `should_time_out` fails every call with [`BridgeError::Timeout`].

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use crate::application::bridge::{BridgeError, BridgeRunner, CommandOutput, RunOptions};

/// One recorded invocation.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// Full argument list as the real runner would pass it.
    pub args: Vec<String>,
    pub options: RunOptions,
    pub at: Instant,
}

/// A runner that records calls instead of spawning processes.
#[derive(Default)]
pub struct MockBridgeRunner {
    pub calls: Mutex<Vec<RecordedCall>>,
    /// Stdout returned by every successful call.
    pub stdout: Mutex<String>,
    pub should_fail: bool,
    pub fail_on_call: Option<usize>,
    pub should_time_out: bool,
}

impl MockBridgeRunner {
    /// Creates a runner that succeeds with empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a runner whose calls all succeed with `stdout`.
    pub fn with_stdout(stdout: impl Into<String>) -> Self {
        Self {
            stdout: Mutex::new(stdout.into()),
            ..Self::default()
        }
    }

    /// Snapshot of all recorded calls.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Argument lists of all recorded calls, in order.
    pub fn recorded_args(&self) -> Vec<Vec<String>> {
        self.calls().into_iter().map(|c| c.args).collect()
    }

    /// The key codes of every `input keyevent` call, in order.
    pub fn key_events(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c.args.as_slice() {
                [.., input, keyevent, key] if input == "input" && keyevent == "keyevent" => {
                    Some(key.clone())
                }
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl BridgeRunner for MockBridgeRunner {
    async fn run(&self, args: &[String], options: &RunOptions) -> Result<CommandOutput, BridgeError> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(RecordedCall {
                args: options.final_args(args),
                options: options.clone(),
                at: Instant::now(),
            });
            calls.len() - 1
        };

        if self.should_time_out {
            return Err(BridgeError::Timeout {
                command: args.join(" "),
                timeout: options.timeout.unwrap_or(Duration::from_secs(5)),
            });
        }
        if self.should_fail || self.fail_on_call == Some(index) {
            return Err(BridgeError::CommandFailed {
                message: "mock failure".to_string(),
                code: Some(1),
            });
        }

        Ok(CommandOutput {
            stdout: self.stdout.lock().unwrap().clone(),
            stderr: String::new(),
            code: 0,
        })
    }
}
