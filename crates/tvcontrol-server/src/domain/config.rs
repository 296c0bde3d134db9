//! Server configuration types.
//!
//! [`ServerConfig`] is the single source of truth for all runtime settings.
//! It is built once at startup from CLI arguments / environment variables
//! (see `main.rs`) and then shared read-only; nothing reads the environment
//! after that.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// All runtime configuration for the TVControl server.
///
/// # Example
///
/// ```rust
/// use tvcontrol_server::domain::ServerConfig;
///
/// let cfg = ServerConfig::default();
/// assert_eq!(cfg.bind_addr.port(), 5000);
/// assert_eq!(cfg.adb_path.to_str(), Some("adb"));
/// ```
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,

    /// Path (or bare name resolved via `PATH`) of the bridge executable.
    pub adb_path: PathBuf,

    /// Timeout applied to every bridge invocation that does not override it.
    pub command_timeout: Duration,

    /// Timeout for `connect`, which waits on a TCP handshake with the TV.
    pub connect_timeout: Duration,

    /// Pause between consecutive key events of a named action.
    pub key_delay: Duration,

    /// Pause between digits when entering a channel number.
    ///
    /// Shorter than [`key_delay`](Self::key_delay): most tuners commit a
    /// partially typed number after roughly a second of inactivity.
    pub channel_digit_delay: Duration,

    /// Directory holding the browser remote (`index.html`, `app.js`, ...).
    ///
    /// `None` serves the JSON API only.
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    /// | Field               | Default        |
    /// |---------------------|----------------|
    /// | bind_addr           | `0.0.0.0:5000` |
    /// | adb_path            | `adb`          |
    /// | command_timeout     | 5 s            |
    /// | connect_timeout     | 10 s           |
    /// | key_delay           | 120 ms         |
    /// | channel_digit_delay | 90 ms          |
    /// | static_dir          | none           |
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            adb_path: PathBuf::from("adb"),
            command_timeout: Duration::from_millis(5000),
            connect_timeout: Duration::from_millis(10_000),
            key_delay: Duration::from_millis(120),
            channel_digit_delay: Duration::from_millis(90),
            static_dir: None,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port_is_5000() {
        // Arrange / Act
        let cfg = ServerConfig::default();
        // Assert
        assert_eq!(cfg.bind_addr.port(), 5000);
    }

    #[test]
    fn test_default_binds_all_interfaces() {
        let cfg = ServerConfig::default();
        assert!(cfg.bind_addr.ip().is_unspecified());
    }

    #[test]
    fn test_default_timeouts() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.command_timeout, Duration::from_secs(5));
        // Connect waits on the network, so it gets the longer budget.
        assert!(cfg.connect_timeout > cfg.command_timeout);
    }

    #[test]
    fn test_default_delays() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.key_delay, Duration::from_millis(120));
        assert_eq!(cfg.channel_digit_delay, Duration::from_millis(90));
    }

    #[test]
    fn test_default_serves_api_only() {
        assert!(ServerConfig::default().static_dir.is_none());
    }
}
