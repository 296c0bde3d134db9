//! Remote-control use cases.
//!
//! [`RemoteService`] turns validated requests into bridge invocations.  It
//! knows *which* commands to run and in what order; *how* they run is the
//! injected [`BridgeRunner`]'s business.
//!
//! # Ordering
//!
//! A key-event sequence is strictly sequential: each event is awaited and
//! followed by a fixed pause before the next one is spawned, because the TV's
//! input service drops events that overlap.  Nothing orders *separate*
//! requests against each other; two concurrent commands to the same device
//! may interleave their key events.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use tvcontrol_core::domain::escape_input_text;
use tvcontrol_core::{channel_key_sequence, parse_device_list, Action, Device};

use crate::application::bridge::{BridgeError, BridgeRunner, CommandOutput, RunOptions};
use crate::domain::ServerConfig;

/// Substring of `adb connect` output that signals success.
///
/// Also matches `already connected to ...`, which is what we want.
const CONNECTED_MARKER: &str = "connected to";

/// Error type for remote-control use cases.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request was rejected before any process was spawned.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Bridge(#[from] BridgeError),
}

impl ServiceError {
    fn validation(message: impl Into<String>) -> Self {
        ServiceError::Validation(message.into())
    }
}

/// Delays and timeouts the service applies on top of the runner's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceTiming {
    pub connect_timeout: Duration,
    pub key_delay: Duration,
    pub channel_digit_delay: Duration,
}

impl From<&ServerConfig> for ServiceTiming {
    fn from(config: &ServerConfig) -> Self {
        Self {
            connect_timeout: config.connect_timeout,
            key_delay: config.key_delay,
            channel_digit_delay: config.channel_digit_delay,
        }
    }
}

impl Default for ServiceTiming {
    fn default() -> Self {
        ServiceTiming::from(&ServerConfig::default())
    }
}

/// Result of `connect`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectOutcome {
    pub message: String,
    /// `false` does not mean the command failed; the tool exited 0 but did
    /// not print a confirmation.
    pub connected: bool,
}

/// The remote-control use cases.
pub struct RemoteService {
    runner: Arc<dyn BridgeRunner>,
    timing: ServiceTiming,
}

fn args<const N: usize>(list: [&str; N]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl RemoteService {
    pub fn new(runner: Arc<dyn BridgeRunner>, timing: ServiceTiming) -> Self {
        Self { runner, timing }
    }

    pub fn timing(&self) -> ServiceTiming {
        self.timing
    }

    /// Lists devices known to the bridge, in the order the tool reports them.
    ///
    /// # Errors
    ///
    /// [`ServiceError::Bridge`] if `devices` fails or times out.
    pub async fn devices(&self) -> Result<Vec<Device>, ServiceError> {
        let output = self
            .runner
            .run(&args(["devices"]), &RunOptions::default())
            .await?;
        let devices = parse_device_list(&output.stdout);
        debug!(count = devices.len(), "device list refreshed");
        Ok(devices)
    }

    /// Connects the bridge to a network device (`address:port`).
    ///
    /// Uses the longer connect timeout.  A zero exit without the
    /// `connected to` confirmation is still `Ok`, with `connected = false`.
    ///
    /// # Errors
    ///
    /// [`ServiceError::Validation`] for a blank host (nothing is spawned),
    /// [`ServiceError::Bridge`] if the tool fails.
    pub async fn connect(&self, host: &str) -> Result<ConnectOutcome, ServiceError> {
        let host = host.trim();
        if host.is_empty() {
            return Err(ServiceError::validation("Host is required to connect."));
        }

        let output = self
            .runner
            .run(
                &args(["connect", host]),
                &RunOptions::with_timeout(self.timing.connect_timeout),
            )
            .await?;

        let message = output.message().to_string();
        let connected = message.contains(CONNECTED_MARKER);
        if connected {
            info!(%host, "connected to device");
        } else {
            warn!(%host, %message, "connect exited cleanly without confirmation");
        }

        Ok(ConnectOutcome { message, connected })
    }

    /// Disconnects one host, or every network device when `host` is blank.
    ///
    /// The tool's output is returned as-is; it is not inspected.
    pub async fn disconnect(&self, host: Option<&str>) -> Result<String, ServiceError> {
        let host = host.map(str::trim).filter(|h| !h.is_empty());
        let argv = match host {
            Some(h) => args(["disconnect", h]),
            None => args(["disconnect"]),
        };

        let output = self.runner.run(&argv, &RunOptions::default()).await?;
        info!(host = host.unwrap_or("<all>"), "disconnected");
        Ok(output.message().to_string())
    }

    /// Runs `shell <args...>` on the target device.
    ///
    /// # Errors
    ///
    /// [`ServiceError::Validation`] if `shell_args` is empty.
    pub async fn shell(
        &self,
        shell_args: &[String],
        options: &RunOptions,
    ) -> Result<CommandOutput, ServiceError> {
        if shell_args.is_empty() {
            return Err(ServiceError::validation(
                "Shell command arguments are required.",
            ));
        }

        let mut argv = Vec::with_capacity(shell_args.len() + 1);
        argv.push("shell".to_string());
        argv.extend_from_slice(shell_args);
        Ok(self.runner.run(&argv, options).await?)
    }

    /// Sends one key event.  The identifier is upper-cased, so
    /// `keycode_home` and `KEYCODE_HOME` are equivalent.
    pub async fn send_keyevent(
        &self,
        key: &str,
        serial: Option<&str>,
    ) -> Result<String, ServiceError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(ServiceError::validation("Key event is required."));
        }

        let normalized = key.to_uppercase();
        self.shell(
            &args(["input", "keyevent", normalized.as_str()]),
            &RunOptions::for_serial(serial),
        )
        .await?;
        Ok(format!("Sent {normalized}"))
    }

    /// Sends key events one after another with `delay` between them.
    ///
    /// Stops at the first failure and returns it; events after the failing
    /// one are never sent.
    pub async fn send_keyevent_sequence<K>(
        &self,
        keys: &[K],
        delay: Duration,
        serial: Option<&str>,
    ) -> Result<String, ServiceError>
    where
        K: AsRef<str> + Sync,
    {
        for (i, key) in keys.iter().enumerate() {
            if i > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            self.send_keyevent(key.as_ref(), serial).await?;
        }

        let joined = keys
            .iter()
            .map(|k| -> &str { k.as_ref() })
            .collect::<Vec<_>>()
            .join(", ");
        Ok(format!("Sent sequence {joined}"))
    }

    /// Sends the key sequence mapped to a named action.
    ///
    /// # Errors
    ///
    /// [`ServiceError::Validation`] for a missing or unknown action; nothing
    /// is spawned in that case.
    pub async fn dispatch_action(
        &self,
        name: Option<&str>,
        serial: Option<&str>,
    ) -> Result<Action, ServiceError> {
        let name = name.unwrap_or_default();
        if name.is_empty() {
            return Err(ServiceError::validation("Command action is required."));
        }
        let action: Action = name
            .parse()
            .map_err(|e: tvcontrol_core::UnknownAction| ServiceError::validation(e.to_string()))?;

        debug!(%action, "dispatching action");
        self.send_keyevent_sequence(action.key_events(), self.timing.key_delay, serial)
            .await?;
        Ok(action)
    }

    /// Types a channel number digit by digit, optionally followed by enter.
    ///
    /// Returns the trimmed channel string.
    pub async fn set_channel(
        &self,
        channel: &str,
        confirm: bool,
        serial: Option<&str>,
    ) -> Result<String, ServiceError> {
        let keys = channel_key_sequence(channel, confirm)
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let channel = channel.trim().to_string();
        debug!(%channel, confirm, "setting channel");
        self.send_keyevent_sequence(&keys, self.timing.channel_digit_delay, serial)
            .await?;
        Ok(channel)
    }

    /// Types free text into the focused field on the device.
    pub async fn input_text(
        &self,
        text: Option<&str>,
        serial: Option<&str>,
    ) -> Result<String, ServiceError> {
        let text = text.unwrap_or_default();
        if text.is_empty() {
            return Err(ServiceError::validation("Text payload is required."));
        }

        let escaped = escape_input_text(text);
        self.shell(
            &args(["input", "text", escaped.as_str()]),
            &RunOptions::for_serial(serial),
        )
        .await?;
        Ok("Text input sent".to_string())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
